//! Language tag list for the profile form.

use serde::Serialize;

/// Ordered set of languages the traveller speaks.
///
/// Entries are trimmed, non-empty and unique; order is insertion order.
/// Only [`LanguageList::add`] builds entries, so the list is serialize-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageList {
    entries: Vec<String>,
}

impl LanguageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language. Returns `true` if the list changed.
    ///
    /// Blank input and exact duplicates (after trimming) are ignored.
    pub fn add(&mut self, raw: &str) -> bool {
        let lang = raw.trim();
        if lang.is_empty() || self.contains(lang) {
            return false;
        }
        self.entries.push(lang.to_string());
        true
    }

    /// Remove a language by name. Removing a non-member is a no-op.
    pub fn remove(&mut self, lang: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l != lang);
        self.entries.len() != before
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.entries.iter().any(|l| l == lang)
    }

    /// Current entries, in the order tags are rendered
    pub fn tags(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-joined list for the completed profile summary
    pub fn joined(&self) -> String {
        self.entries.join(", ")
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.clone()
    }
}
