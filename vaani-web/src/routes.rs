use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::AppState;
use crate::pages::{ErrorPage, LoginPage, ProfilePage, UserDetailsPage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[at("/user-details")]
    UserDetails,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where a visit is redirected given the session state; `None` means the
/// route renders its own screen. Every screen but login needs a session.
pub(crate) fn redirect_target(route: &MainRoute, is_authenticated: bool) -> Option<MainRoute> {
    match route {
        MainRoute::Login | MainRoute::Home if is_authenticated => Some(MainRoute::Profile),
        MainRoute::Login => None,
        MainRoute::Home => Some(MainRoute::Login),
        MainRoute::Profile | MainRoute::UserDetails | MainRoute::NotFound => {
            if is_authenticated {
                None
            } else {
                Some(MainRoute::Login)
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = user.is_some();

    if let Some(target) = redirect_target(&props.route, is_authenticated) {
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    match props.route {
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::UserDetails => html! { <UserDetailsPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
        // Home always resolves to a redirect above.
        MainRoute::Home => html! {},
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <MainRouteView {route} /> }
}
