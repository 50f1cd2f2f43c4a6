//! Tests for the profile screen's intent handlers
//!
//! Exercises language changes, logout sequencing, and announcement text
//! through recording callbacks, with no browser involved.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use shared::models::User;
    use yew::Callback;

    use crate::models::AppState;
    use crate::pages::profile::{
        WELCOME_ANNOUNCEMENT, change_language, initial, log_out, resolve_label,
    };
    use crate::voice::Voice;

    fn recording_voice() -> (Voice, Rc<RefCell<Vec<String>>>) {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let recorder = spoken.clone();
        let voice = Voice::from_callback(Callback::from(move |text: String| {
            recorder.borrow_mut().push(text);
        }));
        (voice, spoken)
    }

    fn recording_strings() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = seen.clone();
        let callback = Callback::from(move |value: String| {
            recorder.borrow_mut().push(value);
        });
        (callback, seen)
    }

    /// Tests the fixed welcome announcement
    #[test]
    fn test_welcome_announcement_text() {
        assert_eq!(
            WELCOME_ANNOUNCEMENT,
            "Welcome to your profile. You can view and edit your information here."
        );
    }

    /// Tests a language change to a known code
    #[test]
    fn test_change_language_known_code() {
        let (set_app_language, stored) = recording_strings();
        let (set_locale, locales) = recording_strings();
        let (voice, spoken) = recording_voice();

        change_language(&set_app_language, &set_locale, &voice, "hi");

        assert_eq!(*stored.borrow(), vec!["hi"]);
        assert_eq!(*locales.borrow(), vec!["hi"]);
        let spoken = spoken.borrow();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("Hindi"), "got: {}", spoken[0]);
    }

    /// Tests a language change to an unrecognized code
    #[test]
    fn test_change_language_unknown_code() {
        let (set_app_language, stored) = recording_strings();
        let (set_locale, locales) = recording_strings();
        let (voice, spoken) = recording_voice();

        change_language(&set_app_language, &set_locale, &voice, "xx");

        assert_eq!(*stored.borrow(), vec!["xx"]);
        assert_eq!(*locales.borrow(), vec!["xx"]);
        let spoken = spoken.borrow();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("xx"), "got: {}", spoken[0]);
    }

    /// Tests that the store and locale update before the announcement
    #[test]
    fn test_change_language_event_order() {
        let events = Rc::new(RefCell::new(Vec::new()));

        let set_app_language = {
            let events = events.clone();
            Callback::from(move |code: String| {
                events.borrow_mut().push(format!("store:{code}"));
            })
        };
        let set_locale = {
            let events = events.clone();
            Callback::from(move |code: String| {
                events.borrow_mut().push(format!("locale:{code}"));
            })
        };
        let voice = {
            let events = events.clone();
            Voice::from_callback(Callback::from(move |_: String| {
                events.borrow_mut().push("speak".to_string());
            }))
        };

        change_language(&set_app_language, &set_locale, &voice, "mr");

        assert_eq!(*events.borrow(), vec!["store:mr", "locale:mr", "speak"]);
    }

    /// Tests that logout ends the session exactly once, before navigating
    #[test]
    fn test_log_out_sequence() {
        let events = Rc::new(RefCell::new(Vec::new()));

        let end_session = {
            let events = events.clone();
            Callback::from(move |()| events.borrow_mut().push("end-session"))
        };
        let goto_login = {
            let events = events.clone();
            Callback::from(move |()| events.borrow_mut().push("navigate"))
        };

        log_out(&end_session, &goto_login);

        assert_eq!(*events.borrow(), vec!["end-session", "navigate"]);
    }

    /// Tests that logout clears the user but keeps the language choice
    #[test]
    fn test_log_out_preserves_language() {
        let state = Rc::new(RefCell::new(AppState::default()));
        state
            .borrow_mut()
            .set_user(User::new("Asha Patil", "asha@example.com"));
        state.borrow_mut().set_language("mr");

        let end_session = {
            let state = state.clone();
            Callback::from(move |()| state.borrow_mut().log_out())
        };
        let (goto_login, navigations) = {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let recorder = seen.clone();
            (Callback::from(move |()| recorder.borrow_mut().push(())), seen)
        };

        log_out(&end_session, &goto_login);

        assert!(state.borrow().user.is_none());
        assert_eq!(state.borrow().language, "mr");
        assert_eq!(navigations.borrow().len(), 1);
    }

    /// Tests label resolution against translation misses
    #[test]
    fn test_resolve_label() {
        assert_eq!(
            resolve_label(
                "Low vision".to_string(),
                "health.conditions.low_vision",
                "low_vision"
            ),
            "Low vision"
        );
        assert_eq!(
            resolve_label(String::new(), "health.conditions.low_vision", "low_vision"),
            "low_vision"
        );
        assert_eq!(
            resolve_label(
                "health.conditions.low_vision".to_string(),
                "health.conditions.low_vision",
                "low_vision"
            ),
            "low_vision"
        );
    }

    /// Tests the avatar initial helper
    #[test]
    fn test_initial() {
        assert_eq!(initial("asha"), "A");
        assert_eq!(initial(""), "");
        assert_eq!(initial("आशा"), "आ");
    }
}
