use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 px-4 text-center">
            <h1 class="text-3xl font-bold">{i18n.t("error.title")}</h1>
            <p class="opacity-80">{i18n.t("error.body")}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary btn-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
        </main>
    }
}
