use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct InputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: String,
    /// HTML input type, "text" when empty.
    #[prop_or_default]
    pub kind: String,
}

/// Labelled text input with a large touch target.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(target.value());
        })
    };

    let kind = if props.kind.is_empty() {
        "text".to_string()
    } else {
        props.kind.clone()
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text text-lg">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                type={kind}
                class="input input-bordered input-lg w-full"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput} />
        </div>
    }
}
