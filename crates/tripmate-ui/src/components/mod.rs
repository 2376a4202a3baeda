//! Reusable form components

mod annotation;
mod button;
mod input;
mod pills;
mod tags;

pub use annotation::*;
pub use button::*;
pub use input::*;
pub use pills::*;
pub use tags::*;
