//! Visual theme for Tripmate.

mod styles;

pub use styles::GLOBAL_STYLES;
