use yew::{Callback, Html, Properties, function_component, html};

use crate::components::language_picker_button::LanguagePickerButton;
use crate::language;

#[derive(Properties, PartialEq, Clone)]
pub struct LanguagePickerProps {
    /// Code of the language currently in effect.
    pub current: String,
    pub on_select: Callback<String>,
}

/// One button per supported language, the active one highlighted.
#[function_component(LanguagePicker)]
pub fn language_picker(props: &LanguagePickerProps) -> Html {
    let supported = language::supported_languages();
    let mut languages: Vec<_> = supported.iter().collect();
    languages.sort_by(|a, b| a.1.native_name.cmp(b.1.native_name));

    html! {
        <div class="grid grid-cols-1 sm:grid-cols-2 gap-2" role="group">
        {
            for languages.into_iter().map(|(_, info)| {
                html! {
                    <LanguagePickerButton
                        is_active={info.code == props.current}
                        info={info.clone()}
                        on_click={props.on_select.clone()}
                    />
                }
            })
        }
        </div>
    }
}
