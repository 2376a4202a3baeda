//! Destination catalog keyed by trip type.
//!
//! The destination select is regenerated from this catalog every time the
//! trip type changes, which keeps the chosen destination a member of the
//! current trip type's list.

use serde::{Deserialize, Serialize};

/// Placeholder option rendered first in the destination select.
pub const DESTINATION_PLACEHOLDER: &str = "Select a destination";

const DOMESTIC: &[&str] = &[
    "Delhi", "Mumbai", "Goa", "Jaipur", "Manali", "Kerala", "Kolkata", "Varanasi",
];

const INTERNATIONAL: &[&str] = &[
    "Paris",
    "New York",
    "London",
    "Dubai",
    "Tokyo",
    "Sydney",
    "Singapore",
    "Bali",
];

/// Kind of trip the traveller is planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    Domestic,
    International,
}

impl TripType {
    /// All trip types in display order
    pub const ALL: [TripType; 2] = [TripType::Domestic, TripType::International];

    /// Value used in the select element and on the wire
    pub fn key(&self) -> &'static str {
        match self {
            TripType::Domestic => "domestic",
            TripType::International => "international",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Domestic => "Domestic",
            TripType::International => "International",
        }
    }

    /// Parse a select value. Empty or unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "domestic" => Some(TripType::Domestic),
            "international" => Some(TripType::International),
            _ => None,
        }
    }

    /// Destinations offered for this trip type, in catalog order
    pub fn destinations(&self) -> &'static [&'static str] {
        match self {
            TripType::Domestic => DOMESTIC,
            TripType::International => INTERNATIONAL,
        }
    }

    pub fn offers(&self, destination: &str) -> bool {
        self.destinations().contains(&destination)
    }
}

/// State of the destination select for a given trip type value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationOptions {
    /// Whether the select accepts input
    pub enabled: bool,
    /// Selectable destinations, not counting the placeholder
    pub options: &'static [&'static str],
}

/// Options for the destination select given the raw trip type value.
///
/// An empty or unknown trip type leaves only the placeholder and disables
/// the control.
pub fn destination_options(trip_type: &str) -> DestinationOptions {
    match TripType::from_key(trip_type) {
        Some(kind) => DestinationOptions {
            enabled: true,
            options: kind.destinations(),
        },
        None => DestinationOptions {
            enabled: false,
            options: &[],
        },
    }
}

/// Trip type and destination select values, kept consistent.
///
/// Any trip type change clears the destination, since the destination list
/// it was picked from has been replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripSelection {
    trip_type: String,
    destination: String,
}

impl TripSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip_type(&self) -> &str {
        &self.trip_type
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn set_trip_type(&mut self, value: impl Into<String>) {
        self.trip_type = value.into();
        self.destination.clear();
    }

    pub fn set_destination(&mut self, value: impl Into<String>) {
        self.destination = value.into();
    }

    /// Options for the destination select under the current trip type
    pub fn options(&self) -> DestinationOptions {
        destination_options(&self.trip_type)
    }
}
