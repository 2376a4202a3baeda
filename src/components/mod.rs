//! UI Components for Tripmate.

pub mod cards;
pub mod images;
mod nav_header;
pub mod profile;

pub use nav_header::{NavHeader, NavLocation};
