//! Plan Card Component
//!
//! One travel plan in the search grid. Hidden cards stay mounted and are
//! only toggled with `display`, so filtering never rebuilds the grid.

use dioxus::prelude::*;
use tripmate_core::Plan;

#[component]
pub fn PlanCard(plan: Plan, visible: bool) -> Element {
    let dates = plan.date_range();

    rsx! {
        div {
            class: "plan-card",
            style: if visible { "display: block" } else { "display: none" },
            if !plan.image_url.is_empty() {
                img { class: "plan-card-image", src: "{plan.image_url}", alt: "{plan.name}" }
            }
            div { class: "plan-card-body",
                h3 { class: "plan-card-title", "{plan.name}" }
                if !plan.location.is_empty() {
                    p { class: "plan-card-location", "{plan.location}" }
                }
                if !dates.is_empty() {
                    p { class: "plan-card-dates", "{dates}" }
                }
                if !plan.description.is_empty() {
                    p { class: "plan-card-description", "{plan.description}" }
                }
            }
        }
    }
}
