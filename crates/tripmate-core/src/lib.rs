//! Tripmate Core Library
//!
//! Browser-independent logic behind the Tripmate travel client.
//!
//! ## Overview
//!
//! The web client has three independent screens: an interest selector, a
//! profile form and a plan search. Everything those screens decide (what is
//! selected, whether the form is valid, how old the traveller is, how big
//! the compressed photo is, which cards match a query) is computed here from
//! plain values, so it can be tested without a DOM.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use tripmate_core::{Preference, ProfileForm, ProfileFormController};
//!
//! let mut controller = ProfileFormController::new();
//! controller.add_language("English");
//!
//! let form = ProfileForm {
//!     name: "Asha".into(),
//!     nationality: "Indian".into(),
//!     birthday: "2000-06-15".into(),
//!     trip_type: "domestic".into(),
//!     destination: "Goa".into(),
//!     preference: Some(Preference::Any),
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
//! let draft = controller.begin_submit(&form, today).expect("valid form");
//! assert_eq!(draft.age, 23);
//! ```

pub mod age;
pub mod bootstrap;
pub mod controller;
pub mod destinations;
pub mod error;
pub mod interests;
pub mod languages;
pub mod photo;
pub mod plans;
pub mod profile;
pub mod validation;

// Re-exports
pub use age::{age_advisory, age_on, parse_birthday, ADULT_AGE, UNDER_AGE_ADVISORY};
pub use bootstrap::{PageBootstrap, BOOTSTRAP_ELEMENT_ID};
pub use controller::{ProfileFormController, ProfileView, SubmitLabel};
pub use destinations::{
    destination_options, DestinationOptions, TripSelection, TripType, DESTINATION_PLACEHOLDER,
};
pub use error::{ClientError, ClientResult};
pub use interests::{
    default_interests, InterestSelector, InterestsRequest, InterestsResponse, SelectedInterests,
    FOLLOW_UP_ROUTE, INTERESTS_ENDPOINT,
};
pub use languages::LanguageList;
pub use photo::{
    check_upload, compress_to_data_url, declared_mime, fit_within, upload_mime, upload_size,
    JPEG_QUALITY, MAX_PHOTO_BYTES, MAX_PHOTO_DIMENSION,
};
pub use plans::{is_visible, visible_plans, Plan};
pub use profile::{
    failure_alert, Preference, ProfileDraft, ProfileResponse, ProfileSummary, PROFILE_ENDPOINT,
};
pub use validation::{validate, Field, FieldError, ProfileForm, ValidationReport};
