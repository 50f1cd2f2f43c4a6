use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::components::{Button, ButtonVariant, Card, LanguagePicker};
use crate::language;
use crate::models::AppState;
use crate::routes::MainRoute;
use crate::voice::Voice;

/// Spoken once when the profile screen mounts.
pub(crate) const WELCOME_ANNOUNCEMENT: &str =
    "Welcome to your profile. You can view and edit your information here.";

/// Updates the stored language, switches the active locale, and announces
/// the change by name.
pub(crate) fn change_language(
    set_app_language: &Callback<String>,
    set_locale: &Callback<String>,
    voice: &Voice,
    code: &str,
) {
    set_app_language.emit(code.to_string());
    set_locale.emit(code.to_string());
    voice.speak(language::change_announcement(code));
}

/// Ends the session, then moves to the login screen.
pub(crate) fn log_out(end_session: &Callback<()>, goto_login: &Callback<()>) {
    end_session.emit(());
    goto_login.emit(());
}

/// Translate a label, substituting `fallback` when the active locale has no
/// entry. A miss comes back as the key itself or as an empty string.
pub(crate) fn resolve_label(translated: String, key: &str, fallback: &str) -> String {
    if translated.is_empty() || translated == key {
        fallback.to_string()
    } else {
        translated
    }
}

/// First letter of `name`, used for the avatar placeholder.
pub(crate) fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(String::new, |first| first.to_uppercase().collect())
}

/// The profile screen: identity, health details, emergency contacts,
/// language settings, and the logout action.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (i18n, set_locale) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let voice = Voice::shared();

    use_effect_with(voice.clone(), |voice| {
        voice.speak(WELCOME_ANNOUNCEMENT);
        || ()
    });

    let user = match state.user.clone() {
        Some(user) => user,
        None => return html! {},
    };

    let on_edit = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::UserDetails);
            }
        })
    };

    let set_app_language = {
        let dispatch = dispatch.clone();
        Callback::from(move |code: String| {
            dispatch.reduce_mut(|state| state.set_language(code));
        })
    };

    let on_language_select = {
        let set_locale = set_locale.clone();
        let voice = voice.clone();
        Callback::from(move |code: String| {
            change_language(&set_app_language, &set_locale, &voice, &code);
        })
    };

    let end_session = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(AppState::log_out))
    };

    let goto_login = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Login);
            }
        })
    };

    let on_logout = Callback::from(move |()| log_out(&end_session, &goto_login));

    let avatar = user.profile_image.as_ref().map_or_else(
        || {
            html! {
                <div class="w-28 h-28 rounded-full bg-base-100 flex items-center justify-center text-5xl font-bold border-4 border-base-300 shadow-md">
                    {initial(&user.name)}
                </div>
            }
        },
        |src| {
            html! {
                <img
                    src={src.clone()}
                    alt=""
                    class="w-28 h-28 rounded-full object-cover border-4 border-base-300 shadow-md" />
            }
        },
    );

    let condition_chip = user.health_condition.as_ref().map_or_else(
        || html! { <p class="opacity-70">{i18n.t("health.none_recorded")}</p> },
        |condition| {
            let key = format!("health.conditions.{condition}");
            let label = resolve_label(i18n.t(&key), &key, condition);
            html! {
                <div class="flex flex-wrap gap-2">
                    <span class="badge badge-lg badge-outline">{label}</span>
                </div>
            }
        },
    );

    html! {
        <main class="min-h-screen bg-base-100 flex flex-col items-center py-12 px-4">
            <h1 class="sr-only">{i18n.t("profile.title")}</h1>

            <Card class="w-full max-w-2xl mb-8 relative">
                <button
                    type="button"
                    class="btn btn-circle btn-ghost absolute top-6 right-6"
                    aria-label={i18n.t("profile.edit")}
                    onclick={on_edit}>
                    <i class="fa-solid fa-pen" aria-hidden="true"></i>
                </button>
                <div class="flex flex-col items-center gap-4 mt-4">
                    {avatar}
                    <h2 class="text-3xl font-extrabold tracking-tight">{user.name.clone()}</h2>
                    <p class="text-lg font-medium opacity-80">{user.email.clone()}</p>
                    <div class="flex flex-wrap justify-center gap-4 mt-1">
                        {
                            user.age.map_or_else(
                                || html! {},
                                |age| html! {
                                    <span class="badge badge-lg">
                                        <span class="font-semibold mr-1">{age}</span>
                                        {i18n.t("profile.years")}
                                    </span>
                                },
                            )
                        }
                        {
                            user.gender.map_or_else(
                                || html! {},
                                |gender| html! {
                                    <span class="badge badge-lg badge-accent">
                                        {i18n.t(&format!("gender.{}", gender.as_str()))}
                                    </span>
                                },
                            )
                        }
                    </div>
                    {
                        user.address.as_ref().map_or_else(
                            || html! {},
                            |address| html! {
                                <div class="mt-2 px-4 py-2 bg-base-100 rounded-xl text-center text-sm max-w-xs">
                                    <span class="font-medium">{i18n.t("profile.address")}{": "}</span>
                                    {address.clone()}
                                </div>
                            },
                        )
                    }
                </div>
            </Card>

            <Card title={i18n.t("health.title")} class="w-full max-w-2xl mb-8">
                {condition_chip}
                {
                    user.current_medical_status.as_ref().map_or_else(
                        || html! {},
                        |status| html! {
                            <div class="mt-3">
                                <p class="text-sm opacity-70">{i18n.t("health.current_status")}</p>
                                <p class="text-lg font-medium">{status.clone()}</p>
                            </div>
                        },
                    )
                }
                {
                    user.medical_certificate.as_ref().map_or_else(
                        || html! {},
                        |href| html! {
                            <div class="mt-3">
                                <p class="text-sm opacity-70">{i18n.t("health.certificates")}</p>
                                <a
                                    href={href.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="link underline break-all">
                                    {i18n.t("health.view_certificate")}
                                </a>
                            </div>
                        },
                    )
                }
            </Card>

            {
                if user.emergency_contacts.is_empty() {
                    html! {}
                } else {
                    html! {
                        <Card title={i18n.t("contacts.title")} class="w-full max-w-2xl mb-8">
                            <ul class="space-y-2">
                            {
                                for user.emergency_contacts.iter().map(|contact| {
                                    html! {
                                        <li class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-3 bg-base-100 rounded-lg px-4 py-2">
                                            <span class="font-medium">{contact.name.clone()}</span>
                                            <span class="opacity-80">{contact.number.clone()}</span>
                                        </li>
                                    }
                                })
                            }
                            </ul>
                        </Card>
                    }
                }
            }

            <Card title={i18n.t("language.title")} class="w-full max-w-2xl mb-8">
                <LanguagePicker current={state.language.clone()} on_select={on_language_select} />
            </Card>

            <Button
                variant={ButtonVariant::Danger}
                class="w-full max-w-2xl"
                aria_label={i18n.t("profile.logout")}
                onclick={on_logout}>
                <i class="fa-solid fa-right-from-bracket mr-2" aria-hidden="true"></i>
                {i18n.t("profile.logout")}
            </Button>
        </main>
    }
}
