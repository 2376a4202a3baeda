//! Page bootstrap context for Tripmate.
//!
//! The bootstrap is parsed once in `main` and provided to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let bootstrap = use_bootstrap();
//! let email = bootstrap.user_email.clone();
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use dioxus::prelude::*;
use tripmate_core::{PageBootstrap, BOOTSTRAP_ELEMENT_ID};

/// Read the bootstrap JSON the host page rendered into the document.
///
/// A page without the bootstrap element gets the defaults; a present but
/// malformed element is an error.
pub fn read_bootstrap() -> anyhow::Result<PageBootstrap> {
    let document = gloo::utils::document();
    let Some(element) = document.get_element_by_id(BOOTSTRAP_ELEMENT_ID) else {
        return Ok(PageBootstrap::default());
    };

    let json = element.text_content().unwrap_or_default();
    PageBootstrap::from_json(&json)
        .with_context(|| format!("malformed #{} element", BOOTSTRAP_ELEMENT_ID))
}

/// Hook to access the page bootstrap from context.
pub fn use_bootstrap() -> PageBootstrap {
    use_context::<PageBootstrap>()
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
