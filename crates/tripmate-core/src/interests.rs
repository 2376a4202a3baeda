//! Interest selection state and the `/interests` wire contract.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Endpoint receiving the selected interests
pub const INTERESTS_ENDPOINT: &str = "/interests";

/// Route the client moves to after interests are saved
pub const FOLLOW_UP_ROUTE: &str = "/new";

const SAVE_REJECTED: &str = "Error saving interests. Please try again.";
const SAVE_FAILED: &str = "An error occurred. Please try again.";

/// Interests offered when the host page does not supply its own catalog
pub fn default_interests() -> Vec<String> {
    [
        "Adventure",
        "Beaches",
        "Culture",
        "Food",
        "Hiking",
        "History",
        "Nightlife",
        "Photography",
        "Shopping",
        "Spirituality",
        "Wildlife",
        "Wellness",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Ordered set of selected interest labels (click order, no duplicates)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedInterests {
    labels: Vec<String>,
}

impl SelectedInterests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `label`. Returns `true` if it is now selected.
    ///
    /// A label that is re-selected goes to the end of the order.
    pub fn toggle(&mut self, label: &str) -> bool {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
            false
        } else {
            self.labels.push(label.to_string());
            true
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Body of `POST /interests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestsRequest {
    pub email: String,
    pub interests: Vec<String>,
}

/// Response of `POST /interests`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Page-lifetime state of the interest selector screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestSelector {
    selected: SelectedInterests,
    saving: bool,
}

impl InterestSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, label: &str) -> bool {
        self.selected.toggle(label)
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.contains(label)
    }

    pub fn selected(&self) -> &SelectedInterests {
        &self.selected
    }

    /// Whether a save request is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Build the save request and mark the selector busy.
    ///
    /// Fails without touching any state when nothing is selected, so the
    /// caller never issues a request in that case.
    pub fn prepare_save(&mut self, email: &str) -> ClientResult<InterestsRequest> {
        if self.selected.is_empty() {
            return Err(ClientError::NoInterestsSelected);
        }
        self.saving = true;
        Ok(InterestsRequest {
            email: email.to_string(),
            interests: self.selected.as_slice().to_vec(),
        })
    }

    /// Settle a save request and return the route to navigate to.
    ///
    /// Always clears the busy flag. The selection is left as it was.
    pub fn finish_save(
        &mut self,
        result: ClientResult<InterestsResponse>,
    ) -> ClientResult<&'static str> {
        self.saving = false;
        match result {
            Ok(resp) if resp.success => {
                tracing::info!(count = self.selected.len(), "Interests saved");
                Ok(FOLLOW_UP_ROUTE)
            }
            Ok(_) => {
                tracing::warn!("Server rejected interests");
                Err(ClientError::Rejected {
                    message: SAVE_REJECTED.to_string(),
                })
            }
            Err(e) => {
                tracing::error!("Failed to save interests: {}", e);
                Err(ClientError::Transport(SAVE_FAILED.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut sel = SelectedInterests::new();
        sel.toggle("Food");
        sel.toggle("Hiking");
        let before = sel.clone();

        assert!(sel.toggle("Culture"));
        assert!(!sel.toggle("Culture"));
        assert_eq!(sel, before);
    }

    #[test]
    fn test_reselect_goes_to_end() {
        let mut sel = SelectedInterests::new();
        sel.toggle("Food");
        sel.toggle("Hiking");
        sel.toggle("Food");
        sel.toggle("Food");
        assert_eq!(sel.as_slice(), &["Hiking".to_string(), "Food".to_string()]);
    }

    #[test]
    fn test_empty_save_rejected() {
        let mut selector = InterestSelector::new();
        let err = selector.prepare_save("a@b.c").unwrap_err();
        assert!(matches!(err, ClientError::NoInterestsSelected));
        assert!(!selector.is_saving());
    }

    #[test]
    fn test_save_request_shape() {
        let mut selector = InterestSelector::new();
        selector.toggle("Beaches");
        selector.toggle("Food");
        let req = selector.prepare_save("traveller@example.com").unwrap();
        assert!(selector.is_saving());

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "traveller@example.com",
                "interests": ["Beaches", "Food"],
            })
        );
    }

    #[test]
    fn test_finish_success_navigates() {
        let mut selector = InterestSelector::new();
        selector.toggle("Food");
        selector.prepare_save("x@y.z").unwrap();

        let route = selector
            .finish_save(Ok(InterestsResponse {
                success: true,
                redirect: Some("/new".to_string()),
            }))
            .unwrap();
        assert_eq!(route, FOLLOW_UP_ROUTE);
        assert!(!selector.is_saving());
    }

    #[test]
    fn test_finish_failure_keeps_selection() {
        let mut selector = InterestSelector::new();
        selector.toggle("Food");
        selector.prepare_save("x@y.z").unwrap();

        let err = selector
            .finish_save(Ok(InterestsResponse::default()))
            .unwrap_err();
        assert_eq!(err.to_string(), SAVE_REJECTED);
        assert!(selector.is_selected("Food"));
        assert!(!selector.is_saving());

        selector.prepare_save("x@y.z").unwrap();
        let err = selector
            .finish_save(Err(ClientError::Transport("offline".to_string())))
            .unwrap_err();
        assert_eq!(err.to_string(), SAVE_FAILED);
        assert_eq!(selector.selected().len(), 1);
    }

    #[test]
    fn test_response_missing_success_is_failure() {
        let resp: InterestsResponse = serde_json::from_str(r#"{"error":"No interests received"}"#).unwrap();
        assert!(!resp.success);
    }
}
