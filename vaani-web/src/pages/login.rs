use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use shared::models::User;

use crate::components::{Button, Card, Input};
use crate::models::AppState;
use crate::routes::MainRoute;

/// Local sign-in screen. Collects a display name and email and starts a
/// session with an otherwise empty profile.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, _) = use_translation();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let (_state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let onsubmit = {
        let name_handle = name.clone();
        let email_handle = email.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = name_handle.trim().to_string();
            let email_value = email_handle.trim().to_string();
            if name_value.is_empty() || email_value.is_empty() {
                return;
            }
            let user = User::new(name_value, email_value);
            dispatch.reduce_mut(|state| state.set_user(user));
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Profile);
            }
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |value: String| name.set(value))
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let submit_disabled = name.trim().is_empty() || email.trim().is_empty();

    html! {
        <main class="min-h-screen bg-base-100 flex items-center justify-center px-4">
            <Card title={i18n.t("login.title")} class="w-full max-w-md">
                <p class="text-2xl font-bold text-center mb-2">{i18n.t("app.title")}</p>
                <form class="space-y-4" {onsubmit}>
                    <Input
                        id="login-name"
                        label={i18n.t("login.name")}
                        value={(*name).clone()}
                        on_change={on_name_change} />
                    <Input
                        id="login-email"
                        label={i18n.t("login.email")}
                        value={(*email).clone()}
                        on_change={on_email_change}
                        kind="email" />
                    <Button submit={true} disabled={submit_disabled} class="w-full">
                        {i18n.t("login.submit")}
                    </Button>
                </form>
            </Card>
        </main>
    }
}
