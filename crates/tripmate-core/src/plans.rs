//! Plan cards and the live search filter.

use serde::{Deserialize, Serialize};

/// A travel plan as rendered into the host page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub image_url: String,
}

impl Plan {
    /// Date range as shown on the card, empty when no dates are set
    pub fn date_range(&self) -> String {
        match (self.start_date.is_empty(), self.end_date.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.start_date.clone(),
            (true, false) => self.end_date.clone(),
            (false, false) => format!("{} - {}", self.start_date, self.end_date),
        }
    }

    /// Render key for the card at `index`.
    ///
    /// Ids are optional in the page data, so the position keeps keys unique.
    pub fn list_key(&self, index: usize) -> String {
        format!("{}:{}", index, self.id)
    }

    /// Text content of the card the filter matches against
    pub fn text_content(&self) -> String {
        let dates = self.date_range();
        [
            self.name.as_str(),
            self.location.as_str(),
            dates.as_str(),
            self.description.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Whether a card with `text` stays visible for `query`.
///
/// Case-insensitive substring match; an empty query shows everything.
pub fn is_visible(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility of every plan for `query`, in card order.
pub fn visible_plans(plans: &[Plan], query: &str) -> Vec<bool> {
    let query = query.to_lowercase();
    plans
        .iter()
        .map(|plan| plan.text_content().to_lowercase().contains(&query))
        .collect()
}
