//! Page bootstrap data.
//!
//! The host page renders a JSON blob into
//! `<script id="tripmate-bootstrap" type="application/json">` carrying the
//! signed-in user's email and the data the server would otherwise have
//! templated into the markup. It is read once at startup.

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::interests::default_interests;
use crate::plans::Plan;

/// Element id of the bootstrap script tag
pub const BOOTSTRAP_ELEMENT_ID: &str = "tripmate-bootstrap";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageBootstrap {
    /// Identity of the signed-in user, sent with the interests
    pub user_email: String,
    /// Interest catalog; the built-in one is used when absent
    pub interests: Option<Vec<String>>,
    /// Plans shown on the search page
    pub plans: Vec<Plan>,
}

impl PageBootstrap {
    pub fn from_json(json: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Interests to offer, falling back to the built-in catalog.
    ///
    /// Repeated labels are dropped, keeping the first occurrence; a label is
    /// both the pill's identity and its selection value.
    pub fn interest_catalog(&self) -> Vec<String> {
        match &self.interests {
            Some(list) if !list.is_empty() => {
                let mut catalog: Vec<String> = Vec::with_capacity(list.len());
                for label in list {
                    if !catalog.contains(label) {
                        catalog.push(label.clone());
                    }
                }
                catalog
            }
            _ => default_interests(),
        }
    }
}
