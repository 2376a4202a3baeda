//! Profile form controller.
//!
//! Owns the page-lifetime state of the profile screen: the language list,
//! the compressed photo, the last validation report, the in-flight flag and
//! which of the two views is showing.
//!
//! ## States
//!
//! ```text
//! Editing ──submit ok──▶ Completed
//!    ▲                       │
//!    └─────────back──────────┘
//! ```
//!
//! Submission is split in two so the caller can await the network in
//! between: [`ProfileFormController::begin_submit`] validates and marks the
//! form busy, [`ProfileFormController::finish_submit`] settles the outcome
//! and always clears the busy flag.

use chrono::NaiveDate;

use crate::error::ClientResult;
use crate::languages::LanguageList;
use crate::profile::{ProfileDraft, ProfileResponse, ProfileSummary};
use crate::validation::{validate, ProfileForm, ValidationReport};

/// Which profile view is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileView {
    #[default]
    Editing,
    Completed,
}

/// Label of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    Idle,
    Busy,
}

impl SubmitLabel {
    pub fn text(&self) -> &'static str {
        match self {
            SubmitLabel::Idle => "Next",
            SubmitLabel::Busy => "Saving...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFormController {
    languages: LanguageList,
    photo: Option<String>,
    view: ProfileView,
    submitting: bool,
    report: ValidationReport,
    summary: Option<ProfileSummary>,
}

impl ProfileFormController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Languages ──────────────────────────────────────────────────────────

    pub fn languages(&self) -> &LanguageList {
        &self.languages
    }

    pub fn add_language(&mut self, raw: &str) -> bool {
        self.languages.add(raw)
    }

    pub fn remove_language(&mut self, lang: &str) -> bool {
        self.languages.remove(lang)
    }

    // ── Photo ──────────────────────────────────────────────────────────────

    /// Compressed photo data URL, if one was accepted
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn set_photo(&mut self, data_url: String) {
        self.photo = Some(data_url);
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    // ── Validation ─────────────────────────────────────────────────────────

    /// Run a validation pass, replacing the previous annotations.
    pub fn validate(&mut self, form: &ProfileForm) -> bool {
        self.report = validate(form, &self.languages);
        self.report.is_valid()
    }

    /// Annotations from the last pass
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    // ── Submission ─────────────────────────────────────────────────────────

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> SubmitLabel {
        if self.submitting {
            SubmitLabel::Busy
        } else {
            SubmitLabel::Idle
        }
    }

    /// Validate and assemble the payload, marking the form busy.
    ///
    /// Returns `None` when validation fails (see [`Self::report`]) or a
    /// submission is already in flight; no request should be sent then.
    pub fn begin_submit(&mut self, form: &ProfileForm, today: NaiveDate) -> Option<ProfileDraft> {
        if self.submitting {
            return None;
        }
        match ProfileDraft::assemble(form, &self.languages, self.photo(), today) {
            Ok(draft) => {
                self.report = ValidationReport::default();
                self.submitting = true;
                Some(draft)
            }
            Err(report) => {
                tracing::debug!(errors = report.len(), "Profile form invalid");
                self.report = report;
                None
            }
        }
    }

    /// Settle a submission. The busy flag is cleared on every path.
    ///
    /// On success the summary is captured from `draft` and the completed
    /// view is shown; on failure the error is returned for alerting and the
    /// form stays as it was.
    pub fn finish_submit(
        &mut self,
        draft: &ProfileDraft,
        result: ClientResult<ProfileResponse>,
    ) -> ClientResult<()> {
        self.submitting = false;
        match result.and_then(ProfileResponse::into_result) {
            Ok(()) => {
                tracing::info!(destination = %draft.destination, "Profile saved");
                self.summary = Some(ProfileSummary::from(draft));
                self.view = ProfileView::Completed;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Profile submission failed: {}", e);
                Err(e)
            }
        }
    }

    // ── Views ──────────────────────────────────────────────────────────────

    pub fn view(&self) -> ProfileView {
        self.view
    }

    /// Summary of the last successful submission
    pub fn summary(&self) -> Option<&ProfileSummary> {
        self.summary.as_ref()
    }

    /// Return to editing. Nothing entered is cleared.
    pub fn back(&mut self) {
        self.view = ProfileView::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::profile::Preference;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Kai".to_string(),
            nationality: "Japanese".to_string(),
            birthday: "2000-06-15".to_string(),
            trip_type: "international".to_string(),
            destination: "Tokyo".to_string(),
            preference: Some(Preference::Male),
        }
    }

    #[test]
    fn test_invalid_form_never_busy() {
        let mut ctl = ProfileFormController::new();
        assert!(ctl.begin_submit(&form(), today()).is_none());
        assert!(!ctl.is_submitting());
        assert_eq!(ctl.report().len(), 1);
        assert_eq!(ctl.submit_label().text(), "Next");
    }

    #[test]
    fn test_busy_while_in_flight() {
        let mut ctl = ProfileFormController::new();
        ctl.add_language("Japanese");
        let draft = ctl.begin_submit(&form(), today()).unwrap();
        assert_eq!(draft.age, 24);
        assert!(ctl.is_submitting());
        assert_eq!(ctl.submit_label().text(), "Saving...");

        // Second click while disabled
        assert!(ctl.begin_submit(&form(), today()).is_none());
    }

    #[test]
    fn test_success_completes() {
        let mut ctl = ProfileFormController::new();
        ctl.add_language("Japanese");
        let draft = ctl.begin_submit(&form(), today()).unwrap();
        let resp = ProfileResponse {
            status: "success".to_string(),
            message: None,
        };
        ctl.finish_submit(&draft, Ok(resp)).unwrap();
        assert_eq!(ctl.view(), ProfileView::Completed);
        assert!(!ctl.is_submitting());
        assert_eq!(ctl.summary().unwrap().name, "Kai");
    }

    #[test]
    fn test_every_failure_restores_control() {
        let failures = vec![
            Err(ClientError::Http { status: 500 }),
            Err(ClientError::Transport("Failed to fetch".to_string())),
            Ok(ProfileResponse {
                status: "error".to_string(),
                message: Some("nope".to_string()),
            }),
        ];

        for result in failures {
            let mut ctl = ProfileFormController::new();
            ctl.add_language("Japanese");
            let draft = ctl.begin_submit(&form(), today()).unwrap();
            assert!(ctl.finish_submit(&draft, result).is_err());
            assert!(!ctl.is_submitting());
            assert_eq!(ctl.submit_label(), SubmitLabel::Idle);
            assert_eq!(ctl.view(), ProfileView::Editing);
            assert!(ctl.summary().is_none());
        }
    }

    #[test]
    fn test_back_keeps_data() {
        let mut ctl = ProfileFormController::new();
        ctl.add_language("Japanese");
        ctl.set_photo("data:image/jpeg;base64,AAA".to_string());
        let draft = ctl.begin_submit(&form(), today()).unwrap();
        ctl.finish_submit(
            &draft,
            Ok(ProfileResponse {
                status: "success".to_string(),
                message: None,
            }),
        )
        .unwrap();

        ctl.back();
        assert_eq!(ctl.view(), ProfileView::Editing);
        assert_eq!(ctl.languages().len(), 1);
        assert_eq!(ctl.photo(), Some("data:image/jpeg;base64,AAA"));
    }

    #[test]
    fn test_validate_replaces_report() {
        let mut ctl = ProfileFormController::new();
        assert!(!ctl.validate(&ProfileForm::default()));
        assert_eq!(ctl.report().len(), 7);

        ctl.add_language("English");
        assert!(ctl.validate(&form()));
        assert!(ctl.report().is_empty());
    }
}
