//! Card components for the plans page

mod plan_card;

pub use plan_card::PlanCard;
