use dioxus::prelude::*;

use crate::get_bootstrap;
use crate::pages::{Interests, Plans, Profile};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Redirects to the profile form
/// - `/profile` - Profile form and completed profile view
/// - `/interests` - Interest selection
/// - `/new` - Plan search, reached after interests are saved
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Profile {})]
    #[route("/profile")]
    Profile {},
    #[route("/interests")]
    Interests {},
    #[route("/new")]
    Plans {},
}

/// Root application component.
///
/// Provides global styles, the page bootstrap context and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| get_bootstrap().clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
