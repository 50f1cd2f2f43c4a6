pub(crate) mod button;
pub(crate) mod card;
pub(crate) mod input;
pub(crate) mod language_picker;
pub(crate) mod language_picker_button;

// Re-export components for convenience
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use input::Input;
pub use language_picker::LanguagePicker;
