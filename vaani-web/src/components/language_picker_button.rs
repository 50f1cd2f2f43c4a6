use yew::{Callback, Html, Properties, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguagePickerButtonProps {
    pub is_active: bool,
    pub info: LanguageInfo,
    pub on_click: Callback<String>,
}

#[function_component(LanguagePickerButton)]
pub fn language_picker_button(props: &LanguagePickerButtonProps) -> Html {
    let info = &props.info;
    let code = info.code.to_string();
    let on_click = props.on_click.clone();
    html! {
        <button
            type="button"
            class={if props.is_active {
                "btn btn-lg btn-primary justify-start gap-3"
            } else {
                "btn btn-lg btn-ghost justify-start gap-3"
            }}
            aria-pressed={props.is_active.to_string()}
            onclick={move |_: yew::MouseEvent| on_click.emit(code.clone())}>
            <span class="text-xl">{info.native_name}</span>
            <span class="opacity-70">{info.name}</span>
        </button>
    }
}
