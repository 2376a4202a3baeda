//! Profile draft assembly and the `/profile` wire contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::{age_on, parse_birthday};
use crate::destinations::TripType;
use crate::error::{ClientError, ClientResult};
use crate::languages::LanguageList;
use crate::validation::{validate, Field, ProfileForm, ValidationReport};

/// Endpoint receiving the completed profile
pub const PROFILE_ENDPOINT: &str = "/profile";

const DEFAULT_REJECTION: &str = "Failed to save profile";

/// Travel-companion preference radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Male,
    Female,
    Any,
}

impl Preference {
    /// All options in radio-group order
    pub const ALL: [Preference; 3] = [Preference::Male, Preference::Female, Preference::Any];

    /// Radio value, also sent on the wire
    pub fn value(&self) -> &'static str {
        match self {
            Preference::Male => "male",
            Preference::Female => "female",
            Preference::Any => "any",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preference::Male => "Male travellers",
            Preference::Female => "Female travellers",
            Preference::Any => "No preference",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Preference::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// Body of `POST /profile`, built fresh on every submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub nationality: String,
    pub birthday: NaiveDate,
    pub age: i32,
    pub preference: Preference,
    /// Mirrors `preference`; the server stores both
    pub sex: Preference,
    pub trip_type: TripType,
    pub destination: String,
    pub languages: Vec<String>,
    /// `data:image/jpeg;base64,...` or empty when no photo was chosen
    pub profile_photo: String,
}

impl ProfileDraft {
    /// Validate the form and assemble the payload.
    ///
    /// Besides the checks of [`validate`], the birthday must parse, the trip
    /// type must be a known one and the destination must be offered for it.
    pub fn assemble(
        form: &ProfileForm,
        languages: &LanguageList,
        photo: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, ValidationReport> {
        let mut report = validate(form, languages);
        if !report.is_valid() {
            return Err(report);
        }

        let birthday = parse_birthday(&form.birthday);
        if birthday.is_none() {
            report.push(Field::Birthday, "Birthday is not a valid date");
        }
        let trip_type = TripType::from_key(&form.trip_type);
        match trip_type {
            None => report.push(Field::TripType, "Please select a trip type"),
            Some(kind) if !kind.offers(form.destination.trim()) => {
                report.push(Field::Destination, "Please select a destination for this trip type")
            }
            Some(_) => {}
        }

        match (birthday, trip_type, form.preference) {
            (Some(birthday), Some(trip_type), Some(preference)) if report.is_valid() => Ok(Self {
                name: form.name.trim().to_string(),
                nationality: form.nationality.trim().to_string(),
                birthday,
                age: age_on(birthday, today),
                preference,
                sex: preference,
                trip_type,
                destination: form.destination.trim().to_string(),
                languages: languages.to_vec(),
                profile_photo: photo.unwrap_or_default().to_string(),
            }),
            _ => Err(report),
        }
    }
}

/// Response of `POST /profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProfileResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Application-level outcome, using the server message when present
    pub fn into_result(self) -> ClientResult<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(ClientError::Rejected {
            message: self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
        })
    }
}

/// Alert text for a failed profile submission
pub fn failure_alert(err: &ClientError) -> String {
    format!("{}: {}", DEFAULT_REJECTION, err)
}

/// Read-only view of a submitted profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    pub nationality: String,
    pub birthday: String,
    pub preference: String,
    pub destination: String,
    pub languages: String,
    pub photo: Option<String>,
}

impl From<&ProfileDraft> for ProfileSummary {
    fn from(draft: &ProfileDraft) -> Self {
        Self {
            name: draft.name.clone(),
            nationality: draft.nationality.clone(),
            birthday: draft.birthday.format(crate::age::BIRTHDAY_FORMAT).to_string(),
            preference: draft.preference.value().to_string(),
            destination: draft.destination.clone(),
            languages: draft.languages.join(", "),
            photo: (!draft.profile_photo.is_empty()).then(|| draft.profile_photo.clone()),
        }
    }
}
