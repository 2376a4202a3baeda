//! Page components for Tripmate.

mod interests;
mod plans;
mod profile;

pub use interests::Interests;
pub use plans::Plans;
pub use profile::Profile;
