//! Completed Profile View
//!
//! Read-only summary shown after the server accepts the profile.

use dioxus::prelude::*;
use tripmate_core::ProfileSummary;

use tripmate_ui::{Button, ButtonVariant};

/// Read-only summary with a Back action that returns to the form
#[component]
pub fn CompletedProfile(summary: ProfileSummary, on_back: EventHandler<()>) -> Element {
    let rows = [
        ("Name", "completedName", summary.name.clone()),
        ("Nationality", "completedNationality", summary.nationality.clone()),
        ("Birthday", "completedBirthday", summary.birthday.clone()),
        ("Preference", "completedPreference", summary.preference.clone()),
        ("Destination", "completedDestination", summary.destination.clone()),
        ("Languages", "completedLanguages", summary.languages.clone()),
    ];

    rsx! {
        section { id: "completedProfile", class: "completed-profile",
            h2 { class: "section-title", "Your travel profile" }
            if let Some(photo) = &summary.photo {
                img {
                    id: "completedProfilePhoto",
                    class: "completed-photo",
                    src: "{photo}",
                    alt: "{summary.name}",
                }
            }
            dl { class: "completed-details",
                for (label, id, value) in rows {
                    div { key: "{id}", class: "completed-row",
                        dt { "{label}" }
                        dd { id: "{id}", "{value}" }
                    }
                }
            }
            Button {
                id: "backButton".to_string(),
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_back.call(()),
                "Back"
            }
        }
    }
}
