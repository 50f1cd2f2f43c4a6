use yew::{Callback, Children, Classes, Html, Properties, classes, function_component, html};

/// Visual weight of a [`Button`], mapped onto daisyUI button classes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Danger => "btn-error",
            Self::Ghost => "btn-ghost",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or(false)]
    pub submit: bool,
    #[prop_or_default]
    pub aria_label: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Large-target action button sized for low-vision use.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: yew::MouseEvent| onclick.emit(()))
    };

    html! {
        <button
            type={if props.submit { "submit" } else { "button" }}
            class={classes!("btn", "btn-lg", props.variant.class(), props.class.clone())}
            disabled={props.disabled}
            aria-label={props.aria_label.clone()}
            {onclick}>
            {props.children.clone()}
        </button>
    }
}
