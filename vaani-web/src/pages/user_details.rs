use std::str::FromStr;

use i18nrs::yew::use_translation;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use shared::models::{EmergencyContact, Gender, User};

use crate::components::{Button, ButtonVariant, Card, Input};
use crate::models::AppState;
use crate::routes::MainRoute;
use crate::voice::Voice;

/// Spoken after the edited profile is stored.
pub(crate) const UPDATED_ANNOUNCEMENT: &str = "Profile updated successfully";

/// Stores the edited profile, announces the update, and hands control back
/// to the profile screen.
pub(crate) fn save_profile(
    set_user: &Callback<User>,
    voice: &Voice,
    goto_profile: &Callback<()>,
    draft: User,
) {
    set_user.emit(draft);
    voice.speak(UPDATED_ANNOUNCEMENT);
    goto_profile.emit(());
}

/// Maps an emptied input back to an absent field.
pub(crate) fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// Drops contact rows the editor left completely empty.
pub(crate) fn prune_empty_contacts(contacts: &mut Vec<EmergencyContact>) {
    contacts.retain(|contact| {
        !contact.name.trim().is_empty() || !contact.number.trim().is_empty()
    });
}

fn update_draft<F>(draft: &UseStateHandle<Option<User>>, apply: F) -> Callback<String>
where
    F: Fn(&mut User, String) + 'static,
{
    let draft = draft.clone();
    Callback::from(move |value: String| {
        if let Some(mut user) = (*draft).clone() {
            apply(&mut user, value);
            draft.set(Some(user));
        }
    })
}

/// Edit screen for the signed-in user's profile. Changes are buffered in a
/// local draft until saved.
#[function_component(UserDetailsPage)]
pub fn user_details_page() -> Html {
    let (i18n, _) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let voice = Voice::shared();
    let draft = use_state(|| state.user.clone());

    let user = match (*draft).clone() {
        Some(user) => user,
        None => return html! {},
    };

    let on_name_change = update_draft(&draft, |user, value| user.name = value);
    let on_email_change = update_draft(&draft, |user, value| user.email = value);
    let on_age_change = update_draft(&draft, |user, value| user.age = value.trim().parse().ok());
    let on_address_change = update_draft(&draft, |user, value| user.address = blank_to_none(value));
    let on_condition_change =
        update_draft(&draft, |user, value| user.health_condition = blank_to_none(value));
    let on_status_change = update_draft(&draft, |user, value| {
        user.current_medical_status = blank_to_none(value);
    });
    let on_certificate_change = update_draft(&draft, |user, value| {
        user.medical_certificate = blank_to_none(value);
    });

    let on_gender_change = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let target: HtmlSelectElement = event.target_unchecked_into();
            if let Some(mut user) = (*draft).clone() {
                user.gender = Gender::from_str(&target.value()).ok();
                draft.set(Some(user));
            }
        })
    };

    let contact_name_setter = {
        let draft = draft.clone();
        move |index: usize| {
            let draft = draft.clone();
            Callback::from(move |value: String| {
                if let Some(mut user) = (*draft).clone() {
                    if let Some(contact) = user.emergency_contacts.get_mut(index) {
                        contact.name = value;
                    }
                    draft.set(Some(user));
                }
            })
        }
    };

    let contact_number_setter = {
        let draft = draft.clone();
        move |index: usize| {
            let draft = draft.clone();
            Callback::from(move |value: String| {
                if let Some(mut user) = (*draft).clone() {
                    if let Some(contact) = user.emergency_contacts.get_mut(index) {
                        contact.number = value;
                    }
                    draft.set(Some(user));
                }
            })
        }
    };

    let remove_contact = {
        let draft = draft.clone();
        move |index: usize| {
            let draft = draft.clone();
            Callback::from(move |()| {
                if let Some(mut user) = (*draft).clone() {
                    if index < user.emergency_contacts.len() {
                        user.emergency_contacts.remove(index);
                    }
                    draft.set(Some(user));
                }
            })
        }
    };

    let on_add_contact = {
        let draft = draft.clone();
        Callback::from(move |()| {
            if let Some(mut user) = (*draft).clone() {
                user.emergency_contacts.push(EmergencyContact {
                    name: String::new(),
                    number: String::new(),
                });
                draft.set(Some(user));
            }
        })
    };

    let on_save = {
        let draft = draft.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let voice = voice.clone();
        Callback::from(move |()| {
            let Some(mut edited) = (*draft).clone() else {
                return;
            };
            prune_empty_contacts(&mut edited.emergency_contacts);
            if edited.name.trim().is_empty() || edited.email.trim().is_empty() {
                return;
            }
            let set_user = {
                let dispatch = dispatch.clone();
                Callback::from(move |user: User| {
                    dispatch.reduce_mut(|state| state.set_user(user));
                })
            };
            let goto_profile = {
                let navigator = navigator.clone();
                Callback::from(move |()| {
                    if let Some(ref nav) = navigator {
                        nav.push(&MainRoute::Profile);
                    }
                })
            };
            save_profile(&set_user, &voice, &goto_profile, edited);
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(ref nav) = navigator {
                nav.push(&MainRoute::Profile);
            }
        })
    };

    html! {
        <main class="min-h-screen bg-base-100 flex flex-col items-center py-12 px-4">
            <h1 class="text-3xl font-bold mb-8">{i18n.t("edit.title")}</h1>

            <Card class="w-full max-w-2xl mb-8">
                <div class="space-y-4">
                    <Input
                        id="edit-name"
                        label={i18n.t("edit.name")}
                        value={user.name.clone()}
                        on_change={on_name_change} />
                    <Input
                        id="edit-email"
                        label={i18n.t("edit.email")}
                        value={user.email.clone()}
                        on_change={on_email_change}
                        kind="email" />
                    <Input
                        id="edit-age"
                        label={i18n.t("edit.age")}
                        value={user.age.map_or_else(String::new, |age| age.to_string())}
                        on_change={on_age_change}
                        kind="number" />
                    <div class="form-control w-full">
                        <label class="label" for="edit-gender">
                            <span class="label-text text-lg">{i18n.t("edit.gender")}</span>
                        </label>
                        <select
                            id="edit-gender"
                            class="select select-bordered select-lg w-full"
                            onchange={on_gender_change}>
                            <option value="" selected={user.gender.is_none()}>
                                {i18n.t("edit.gender_unspecified")}
                            </option>
                            <option value="female" selected={user.gender == Some(Gender::Female)}>
                                {i18n.t("gender.female")}
                            </option>
                            <option value="male" selected={user.gender == Some(Gender::Male)}>
                                {i18n.t("gender.male")}
                            </option>
                            <option value="other" selected={user.gender == Some(Gender::Other)}>
                                {i18n.t("gender.other")}
                            </option>
                        </select>
                    </div>
                    <Input
                        id="edit-address"
                        label={i18n.t("edit.address")}
                        value={user.address.clone().unwrap_or_default()}
                        on_change={on_address_change} />
                </div>
            </Card>

            <Card title={i18n.t("health.title")} class="w-full max-w-2xl mb-8">
                <div class="space-y-4">
                    <Input
                        id="edit-condition"
                        label={i18n.t("edit.health_condition")}
                        value={user.health_condition.clone().unwrap_or_default()}
                        on_change={on_condition_change} />
                    <Input
                        id="edit-status"
                        label={i18n.t("edit.medical_status")}
                        value={user.current_medical_status.clone().unwrap_or_default()}
                        on_change={on_status_change} />
                    <Input
                        id="edit-certificate"
                        label={i18n.t("edit.certificate")}
                        value={user.medical_certificate.clone().unwrap_or_default()}
                        on_change={on_certificate_change}
                        kind="url" />
                </div>
            </Card>

            <Card title={i18n.t("contacts.title")} class="w-full max-w-2xl mb-8">
                <ul class="space-y-4">
                {
                    for user.emergency_contacts.iter().enumerate().map(|(index, contact)| {
                        html! {
                            <li key={index} class="flex flex-col sm:flex-row gap-2 sm:items-end">
                                <Input
                                    id={format!("contact-name-{index}")}
                                    label={i18n.t("edit.contact_name")}
                                    value={contact.name.clone()}
                                    on_change={contact_name_setter(index)} />
                                <Input
                                    id={format!("contact-number-{index}")}
                                    label={i18n.t("edit.contact_number")}
                                    value={contact.number.clone()}
                                    on_change={contact_number_setter(index)}
                                    kind="tel" />
                                <Button
                                    variant={ButtonVariant::Ghost}
                                    aria_label={i18n.t("edit.remove")}
                                    onclick={remove_contact(index)}>
                                    {i18n.t("edit.remove")}
                                </Button>
                            </li>
                        }
                    })
                }
                </ul>
                <Button variant={ButtonVariant::Ghost} class="mt-4" onclick={on_add_contact}>
                    <i class="fa-solid fa-plus mr-2" aria-hidden="true"></i>
                    {i18n.t("edit.add_contact")}
                </Button>
            </Card>

            <div class="w-full max-w-2xl flex flex-col sm:flex-row gap-3">
                <Button
                    class="flex-1"
                    aria_label={i18n.t("edit.save")}
                    onclick={on_save}>
                    {i18n.t("edit.save")}
                </Button>
                <Button
                    variant={ButtonVariant::Ghost}
                    class="flex-1"
                    aria_label={i18n.t("edit.cancel")}
                    onclick={on_cancel}>
                    {i18n.t("edit.cancel")}
                </Button>
            </div>
        </main>
    }
}
