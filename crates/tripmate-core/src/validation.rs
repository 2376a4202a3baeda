//! Profile form validation.
//!
//! `validate` is a pure function of the form values and the language list.
//! Each pass produces a fresh [`ValidationReport`], so re-validating never
//! accumulates stale annotations.

use crate::languages::LanguageList;
use crate::profile::Preference;

/// Raw values of the profile form controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub nationality: String,
    /// `YYYY-MM-DD` as produced by the date input, or empty
    pub birthday: String,
    /// Trip type select value (`domestic`, `international` or empty)
    pub trip_type: String,
    pub destination: String,
    /// Checked preference radio, if any
    pub preference: Option<Preference>,
}

/// Form controls that can carry a validation annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Nationality,
    Birthday,
    TripType,
    Destination,
    Preference,
    Languages,
}

impl Field {
    /// Text fields that must be non-empty after trimming, in form order
    pub const REQUIRED: [Field; 5] = [
        Field::Name,
        Field::Nationality,
        Field::Birthday,
        Field::TripType,
        Field::Destination,
    ];

    /// Control identifier, also used as the annotation anchor
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Nationality => "nationality",
            Field::Birthday => "birthday",
            Field::TripType => "tripType",
            Field::Destination => "destination",
            Field::Preference => "preference",
            Field::Languages => "languages",
        }
    }

    fn required_message(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => format!("{}{} is required", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }

    fn value<'a>(&self, form: &'a ProfileForm) -> &'a str {
        match self {
            Field::Name => &form.name,
            Field::Nationality => &form.nationality,
            Field::Birthday => &form.birthday,
            Field::TripType => &form.trip_type,
            Field::Destination => &form.destination,
            Field::Preference | Field::Languages => "",
        }
    }
}

/// One annotation rendered next to a failing control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Outcome of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Annotation for a control, if it failed
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether the control's border should be marked
    pub fn has_error(&self, field: Field) -> bool {
        self.error_for(field).is_some()
    }

    pub(crate) fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

/// Validate the profile form.
///
/// Produces one annotation per empty required field, one if no preference
/// is checked and one if no language was added.
pub fn validate(form: &ProfileForm, languages: &LanguageList) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in Field::REQUIRED {
        if field.value(form).trim().is_empty() {
            let message = field.required_message();
            report.push(field, message);
        }
    }

    if form.preference.is_none() {
        report.push(Field::Preference, "Please select a travel preference");
    }

    if languages.is_empty() {
        report.push(Field::Languages, "Please add at least one language");
    }

    tracing::debug!(errors = report.len(), "Validated profile form");
    report
}
