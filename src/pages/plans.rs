//! Plans Page - live search over the plan cards.

use dioxus::prelude::*;
use tripmate_core::visible_plans;
use tripmate_ui::{Button, ButtonVariant, SearchInput};

use crate::components::cards::PlanCard;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_bootstrap;

#[component]
pub fn Plans() -> Element {
    let bootstrap = use_bootstrap();
    let mut query = use_signal(String::new);

    let plans = bootstrap.plans;
    // Recomputed in full on every keystroke
    let visibility = visible_plans(&plans, &query());
    let shown = visibility.iter().filter(|v| **v).count();

    rsx! {
        div { class: "plans-page",
            NavHeader { current: NavLocation::Plans }

            section { class: "plans-toolbar",
                SearchInput {
                    value: query(),
                    oninput: move |q| query.set(q),
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| gloo::dialogs::alert("Create Plan feature coming soon!"),
                    "Create Plan"
                }
            }

            if plans.is_empty() {
                div { class: "empty-state",
                    p { "No plans yet." }
                }
            } else {
                p { class: "plans-count", "Showing {shown} of {plans.len()} plans" }
                div { class: "plans-grid",
                    for (index, (plan, visible)) in plans.iter().zip(visibility.iter()).enumerate() {
                        PlanCard {
                            key: "{plan.list_key(index)}",
                            plan: plan.clone(),
                            visible: *visible,
                        }
                    }
                }
            }
        }
    }
}
