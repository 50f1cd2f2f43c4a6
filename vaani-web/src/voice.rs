use once_cell::unsync::OnceCell;
use yew::Callback;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_VOICE: OnceCell<Voice> = OnceCell::new();
}

/// Fire-and-forget text-to-speech channel for screen announcements.
///
/// Equality follows the underlying callback, so clones of one voice compare
/// equal while independently built voices do not. Mount effects keyed on a
/// `Voice` re-run only when the sink itself is swapped out.
#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    sink: Callback<String>,
}

impl Voice {
    /// Build a voice that forwards announcements to `sink`.
    pub fn from_callback(sink: Callback<String>) -> Self {
        Self { sink }
    }

    /// The app-wide voice backed by the browser's speech synthesis.
    pub fn shared() -> Self {
        SHARED_VOICE.with(|cell| {
            cell.get_or_init(|| {
                Self::from_callback(Callback::from(|text: String| speak_in_browser(&text)))
            })
            .clone()
        })
    }

    /// Queue `text` for speaking.
    pub fn speak(&self, text: impl Into<String>) {
        self.sink.emit(text.into());
    }
}

fn speak_in_browser(text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let synthesis = match window.speech_synthesis() {
        Ok(synthesis) => synthesis,
        Err(err) => {
            web_sys::console::warn_1(&err);
            return;
        }
    };
    match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
        Ok(utterance) => {
            let config = FrontendConfig::new();
            utterance.set_lang(config.speech_lang());
            utterance.set_rate(config.speech_rate());
            synthesis.speak(&utterance);
        }
        Err(err) => web_sys::console::warn_1(&err),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Verifies spoken text reaches the callback unchanged.
    #[test]
    fn test_speak_forwards_text() {
        let spoken = Rc::new(RefCell::new(Vec::new()));
        let recorder = spoken.clone();
        let voice = Voice::from_callback(Callback::from(move |text: String| {
            recorder.borrow_mut().push(text);
        }));

        voice.speak("hello");
        voice.speak(String::from("namaste"));

        assert_eq!(*spoken.borrow(), vec!["hello", "namaste"]);
    }

    /// Verifies clones of one voice compare equal.
    #[test]
    fn test_clones_compare_equal() {
        let voice = Voice::from_callback(Callback::from(|_: String| {}));
        assert_eq!(voice, voice.clone());
    }

    /// Verifies the app-wide voice is one instance handed out repeatedly, so
    /// effects keyed on it never re-run across renders.
    #[test]
    fn test_shared_voice_is_one_instance() {
        assert_eq!(Voice::shared(), Voice::shared());
    }

    /// Verifies independently built voices are distinguishable.
    #[test]
    fn test_distinct_voices_differ() {
        let first = Voice::from_callback(Callback::from(|_: String| {}));
        let second = Voice::from_callback(Callback::from(|_: String| {}));
        assert_ne!(first, second);
    }
}
