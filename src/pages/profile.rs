//! Profile Page - Travel profile form
//!
//! Editing view: personal details, photo, languages, trip type and
//! destination. After a successful save the form is swapped for the
//! read-only completed view; Back swaps it in again with every field intact.

use dioxus::prelude::*;
use tripmate_core::{
    age_advisory, failure_alert, Field, Preference, ProfileForm, ProfileFormController,
    ProfileView, TripSelection, TripType, DESTINATION_PLACEHOLDER,
};
use tripmate_ui::{
    control_class, Advisory, Button, ButtonVariant, ErrorAnnotation, SelectField, TagInput,
    TagList, TextField,
};

use crate::api;
use crate::components::images::PhotoUpload;
use crate::components::profile::CompletedProfile;
use crate::components::{NavHeader, NavLocation};
use crate::context::today;

/// Profile page - form and completed view
#[component]
pub fn Profile() -> Element {
    let mut controller = use_signal(ProfileFormController::new);

    // Form controls
    let mut name = use_signal(String::new);
    let mut nationality = use_signal(String::new);
    let mut birthday = use_signal(String::new);
    let mut trip = use_signal(TripSelection::new);
    let mut preference: Signal<Option<Preference>> = use_signal(|| None);
    let mut advisory: Signal<Option<&'static str>> = use_signal(|| None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = ProfileForm {
            name: name(),
            nationality: nationality(),
            birthday: birthday(),
            trip_type: trip.read().trip_type().to_string(),
            destination: trip.read().destination().to_string(),
            preference: preference(),
        };

        let Some(draft) = controller.write().begin_submit(&form, today()) else {
            return;
        };

        spawn(async move {
            let result = api::post_profile(&draft).await;
            let outcome = controller.write().finish_submit(&draft, result);
            if let Err(e) = outcome {
                gloo::dialogs::alert(&failure_alert(&e));
            }
        });
    };

    let ctl = controller.read();
    let report = ctl.report().clone();
    let error = |field: Field| report.error_for(field).map(str::to_string);

    let destinations = trip.read().options();
    let destination_choices: Vec<(String, String)> = destinations
        .options
        .iter()
        .map(|d| (d.to_string(), d.to_string()))
        .collect();
    let trip_choices: Vec<(String, String)> = TripType::ALL
        .iter()
        .map(|t| (t.key().to_string(), t.label().to_string()))
        .collect();

    rsx! {
        div { class: "profile-page",
            NavHeader { current: NavLocation::Profile }

            if ctl.view() == ProfileView::Completed {
                if let Some(summary) = ctl.summary() {
                    CompletedProfile {
                        summary: summary.clone(),
                        on_back: move |_| controller.write().back(),
                    }
                }
            } else {
                form {
                    id: "mainForm",
                    class: "profile-form",
                    onsubmit: handle_submit,

                    h2 { class: "section-title", "Tell us about yourself" }

                    PhotoUpload {
                        preview: ctl.photo().map(str::to_string),
                        on_photo: move |data_url| controller.write().set_photo(data_url),
                    }

                    TextField {
                        id: "name".to_string(),
                        label: "Full name".to_string(),
                        value: name(),
                        oninput: move |v| name.set(v),
                        error: error(Field::Name),
                    }

                    TextField {
                        id: "nationality".to_string(),
                        label: "Nationality".to_string(),
                        value: nationality(),
                        oninput: move |v| nationality.set(v),
                        error: error(Field::Nationality),
                    }

                    TextField {
                        id: "birthday".to_string(),
                        label: "Birthday".to_string(),
                        input_type: "date".to_string(),
                        value: birthday(),
                        oninput: move |v| birthday.set(v),
                        onchange: move |v: String| advisory.set(age_advisory(&v, today())),
                        error: error(Field::Birthday),
                        Advisory { message: advisory().map(str::to_string) }
                    }

                    fieldset {
                        class: control_class("preference-group", report.has_error(Field::Preference)),
                        legend { class: "input-label", "Travel companion preference" }
                        for pref in Preference::ALL {
                            label { key: "{pref.value()}", class: "radio-option",
                                input {
                                    r#type: "radio",
                                    name: "preference",
                                    value: pref.value(),
                                    checked: preference() == Some(pref),
                                    onchange: move |_| preference.set(Some(pref)),
                                }
                                "{pref.label()}"
                            }
                        }
                        ErrorAnnotation { message: error(Field::Preference) }
                    }

                    div { class: "form-field",
                        label { class: "input-label", r#for: "languageInput", "Languages" }
                        TagInput {
                            id: "languageInput".to_string(),
                            placeholder: "Add a language".to_string(),
                            has_error: report.has_error(Field::Languages),
                            on_add: move |raw: String| controller.write().add_language(&raw),
                        }
                        ErrorAnnotation { message: error(Field::Languages) }
                        TagList {
                            tags: ctl.languages().to_vec(),
                            tag_class: "language-tag".to_string(),
                            on_remove: move |lang: String| {
                                controller.write().remove_language(&lang);
                            },
                        }
                    }

                    SelectField {
                        id: "tripType".to_string(),
                        label: "Trip type".to_string(),
                        value: trip.read().trip_type().to_string(),
                        options: trip_choices,
                        placeholder: "Select trip type".to_string(),
                        onchange: move |v: String| trip.write().set_trip_type(v),
                        error: error(Field::TripType),
                    }

                    SelectField {
                        id: "destination".to_string(),
                        label: "Destination".to_string(),
                        value: trip.read().destination().to_string(),
                        options: destination_choices,
                        placeholder: DESTINATION_PLACEHOLDER.to_string(),
                        disabled: !destinations.enabled,
                        onchange: move |v: String| trip.write().set_destination(v),
                        error: error(Field::Destination),
                    }

                    Button {
                        id: "submitProfile".to_string(),
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        disabled: ctl.is_submitting(),
                        "{ctl.submit_label().text()}"
                    }
                }
            }
        }
    }
}
