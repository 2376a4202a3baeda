//! End-to-end profile and interest flows
//!
//! Drives the controllers the same way the web pages do, with the network
//! step replaced by canned responses.

use chrono::NaiveDate;
use tripmate_core::{
    destination_options, failure_alert, ClientError, Field, InterestSelector, InterestsResponse,
    Preference, ProfileForm, ProfileFormController, ProfileResponse, ProfileView,
    FOLLOW_UP_ROUTE,
};

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
}

fn complete_form() -> ProfileForm {
    ProfileForm {
        name: "Meera Nair".to_string(),
        nationality: "Indian".to_string(),
        birthday: "2000-06-15".to_string(),
        trip_type: "domestic".to_string(),
        destination: "Kerala".to_string(),
        preference: Some(Preference::Female),
    }
}

fn success() -> ProfileResponse {
    ProfileResponse {
        status: "success".to_string(),
        message: None,
    }
}

#[test]
fn test_successful_submission_shows_summary() {
    let mut ctl = ProfileFormController::new();
    ctl.add_language("Malayalam");
    ctl.add_language("English");

    let form = complete_form();
    let draft = ctl.begin_submit(&form, reference_day()).expect("valid form");
    assert_eq!(draft.age, 23);

    ctl.finish_submit(&draft, Ok(success())).unwrap();
    assert_eq!(ctl.view(), ProfileView::Completed);

    let summary = ctl.summary().unwrap();
    assert_eq!(summary.name, "Meera Nair");
    assert_eq!(summary.nationality, "Indian");
    assert_eq!(summary.birthday, "2000-06-15");
    assert_eq!(summary.preference, "female");
    assert_eq!(summary.destination, "Kerala");
    assert_eq!(summary.languages, "Malayalam, English");
}

#[test]
fn test_fixing_fields_clears_annotations() {
    let mut ctl = ProfileFormController::new();
    assert!(ctl.begin_submit(&ProfileForm::default(), reference_day()).is_none());
    assert_eq!(ctl.report().len(), 7);
    assert!(ctl.report().has_error(Field::Languages));

    ctl.add_language("Tamil");
    let draft = ctl.begin_submit(&complete_form(), reference_day());
    assert!(draft.is_some());
    assert!(ctl.report().is_empty());
}

#[test]
fn test_changing_trip_type_invalidates_destination() {
    let mut ctl = ProfileFormController::new();
    ctl.add_language("English");

    let mut form = complete_form();
    form.trip_type = "international".to_string();
    // Kerala is not offered for international trips
    assert!(ctl.begin_submit(&form, reference_day()).is_none());
    assert!(ctl.report().has_error(Field::Destination));

    let opts = destination_options(&form.trip_type);
    form.destination = opts.options[0].to_string();
    assert!(ctl.begin_submit(&form, reference_day()).is_some());
}

#[test]
fn test_rejected_submission_alert() {
    let mut ctl = ProfileFormController::new();
    ctl.add_language("English");
    let draft = ctl.begin_submit(&complete_form(), reference_day()).unwrap();

    let err = ctl
        .finish_submit(
            &draft,
            Ok(ProfileResponse {
                status: "error".to_string(),
                message: Some("Please log in again".to_string()),
            }),
        )
        .unwrap_err();
    assert_eq!(failure_alert(&err), "Failed to save profile: Please log in again");
    assert_eq!(ctl.view(), ProfileView::Editing);
    assert!(!ctl.is_submitting());

    // Retry by hand succeeds with the same fields
    let draft = ctl.begin_submit(&complete_form(), reference_day()).unwrap();
    ctl.finish_submit(&draft, Ok(success())).unwrap();
    assert_eq!(ctl.view(), ProfileView::Completed);
}

#[test]
fn test_back_then_resubmit() {
    let mut ctl = ProfileFormController::new();
    ctl.add_language("English");
    let draft = ctl.begin_submit(&complete_form(), reference_day()).unwrap();
    ctl.finish_submit(&draft, Ok(success())).unwrap();

    ctl.back();
    assert_eq!(ctl.view(), ProfileView::Editing);

    let mut form = complete_form();
    form.destination = "Goa".to_string();
    let draft = ctl.begin_submit(&form, reference_day()).unwrap();
    ctl.finish_submit(&draft, Ok(success())).unwrap();
    assert_eq!(ctl.summary().unwrap().destination, "Goa");
}

#[test]
fn test_interest_flow() {
    let mut selector = InterestSelector::new();
    assert!(matches!(
        selector.prepare_save("me@example.com"),
        Err(ClientError::NoInterestsSelected)
    ));

    selector.toggle("Hiking");
    selector.toggle("Food");
    let request = selector.prepare_save("me@example.com").unwrap();
    assert_eq!(request.interests, vec!["Hiking", "Food"]);

    let route = selector
        .finish_save(Ok(InterestsResponse {
            success: true,
            redirect: None,
        }))
        .unwrap();
    assert_eq!(route, FOLLOW_UP_ROUTE);
}
