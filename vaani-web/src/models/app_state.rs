use shared::models::User;
use yewdux::Store;

use crate::config::FrontendConfig;

/// Client-side application state shared across pages.
#[derive(Clone, PartialEq, Store)]
pub struct AppState {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Active interface language code, e.g. "en" or "hi".
    pub language: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            language: FrontendConfig::new().default_language().to_string(),
        }
    }
}

impl AppState {
    /// Store `user` as the signed-in user.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Switch the interface language.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.language = code.into();
    }

    /// Clear the signed-in user. The language choice is kept.
    pub fn log_out(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_no_user() {
        let state = AppState::default();
        assert!(state.user.is_none());
        assert_eq!(state.language, "en");
    }

    #[test]
    fn test_set_user() {
        let mut state = AppState::default();
        state.set_user(User::new("Asha Patil", "asha@example.com"));
        let name = state.user.as_ref().map(|user| user.name.as_str());
        assert_eq!(name, Some("Asha Patil"));
    }

    #[test]
    fn test_log_out_clears_user_and_keeps_language() {
        let mut state = AppState::default();
        state.set_user(User::new("Asha Patil", "asha@example.com"));
        state.set_language("hi");

        state.log_out();

        assert!(state.user.is_none());
        assert_eq!(state.language, "hi");
    }
}
