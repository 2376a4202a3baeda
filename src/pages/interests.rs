//! Interests Page - pick what you like to do when travelling.

use dioxus::prelude::*;
use tripmate_core::InterestSelector;
use tripmate_ui::{Button, ButtonVariant, TogglePills};

use crate::api;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_bootstrap;

#[component]
pub fn Interests() -> Element {
    let bootstrap = use_bootstrap();
    let navigator = use_navigator();
    let mut selector = use_signal(InterestSelector::new);

    let catalog = bootstrap.interest_catalog();
    let email = bootstrap.user_email.clone();

    let handle_save = move |_| {
        let prepared = selector.write().prepare_save(&email);
        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                gloo::dialogs::alert(&e.to_string());
                return;
            }
        };

        spawn(async move {
            let result = api::post_interests(&request).await;
            let outcome = selector.write().finish_save(result);
            match outcome {
                Ok(route) => {
                    tracing::info!("Navigating to {}", route);
                    navigator.push(route);
                }
                Err(e) => gloo::dialogs::alert(&e.to_string()),
            }
        });
    };

    let sel = selector.read();

    rsx! {
        div { class: "interests-page",
            NavHeader { current: NavLocation::Interests }

            section { class: "interests-content",
                h2 { class: "section-title", "What do you enjoy?" }
                p { class: "section-subtitle",
                    "Pick as many as you like. We use them to match you with fellow travellers."
                }

                TogglePills {
                    options: catalog,
                    selected: sel.selected().as_slice().to_vec(),
                    on_toggle: move |label: String| {
                        selector.write().toggle(&label);
                    },
                }

                p { class: "selection-count", "{sel.selected().len()} selected" }

                Button {
                    id: "save-button".to_string(),
                    variant: ButtonVariant::Primary,
                    disabled: sel.is_saving(),
                    onclick: handle_save,
                    if sel.is_saving() { "Saving..." } else { "Save & Continue" }
                }
            }
        }
    }
}
