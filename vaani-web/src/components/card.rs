use yew::{Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Sectioning card used to group one topic per screen region.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <section class={classes!("card", "bg-base-200", "shadow-md", props.class.clone())}>
            <div class="card-body">
                {
                    props.title.as_ref().map_or_else(
                        || html! {},
                        |title| html! { <h2 class="card-title text-2xl">{title.clone()}</h2> },
                    )
                }
                {props.children.clone()}
            </div>
        </section>
    }
}
