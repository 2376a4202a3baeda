//! Navigation Header Component
//!
//! App title plus links to the three screens.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Profile,
    Interests,
    Plans,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [
        NavLocation::Profile,
        NavLocation::Interests,
        NavLocation::Plans,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Profile => "Profile",
            NavLocation::Interests => "Interests",
            NavLocation::Plans => "Plans",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Profile => Route::Profile {},
            NavLocation::Interests => Route::Interests {},
            NavLocation::Plans => Route::Plans {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Profile {}, "Tripmate" }
            nav { class: "nav-links",
                for loc in NavLocation::ALL {
                    Link {
                        key: "{loc.display_name()}",
                        class: if loc == props.current { "nav-link active" } else { "nav-link" },
                        to: loc.route(),
                        "{loc.display_name()}"
                    }
                }
            }
        }
    }
}
