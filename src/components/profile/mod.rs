//! Profile-specific components: the completed (read-only) view.

mod completed_profile;

pub use completed_profile::CompletedProfile;
