use jawafdehi_types::feedback::{ContactMethodType, FeedbackDraft, FeedbackType, MAX_CONTACT_METHODS};
use jawafdehi_types::AppErrorKind;
use pretty_assertions::assert_eq;

fn case_page_draft() -> FeedbackDraft {
    FeedbackDraft::new(FeedbackType::Content, "Wrong date on case 207", "/case/207")
}

#[test]
fn blank_description_is_rejected_before_sending() {
    let draft = case_page_draft();
    let err = draft.validate().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("description"), Some("Description is required"));
    assert_eq!(err.field_error("subject"), None);
}

#[test]
fn anonymous_submission_omits_contact_info() {
    let mut draft = case_page_draft();
    draft.description = "The start date should be 2080 Poush.".to_string();
    assert!(draft.validate().is_ok());

    let body = serde_json::to_value(draft.to_submission()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "feedbackType": "content",
            "subject": "Wrong date on case 207",
            "description": "The start date should be 2080 Poush.",
            "relatedPage": "/case/207"
        })
    );
}

#[test]
fn only_filled_contact_methods_are_sent() {
    let mut draft = case_page_draft();
    draft.description = "details".to_string();
    draft.set_contact_value(0, "reader@example.com");
    draft.add_contact_method().unwrap();
    draft.add_contact_method().unwrap();
    draft.set_contact_type(2, ContactMethodType::Whatsapp);
    draft.set_contact_value(2, "+977 9800000000");

    let body = serde_json::to_value(draft.to_submission()).unwrap();
    assert_eq!(
        body["contactInfo"],
        serde_json::json!({
            "contactMethods": [
                {"type": "email", "value": "reader@example.com"},
                {"type": "whatsapp", "value": "+977 9800000000"}
            ]
        })
    );
}

#[test]
fn contact_methods_are_capped() {
    let mut draft = FeedbackDraft::default();
    while draft.contact_methods.len() < MAX_CONTACT_METHODS {
        draft.add_contact_method().unwrap();
    }
    let err = draft.add_contact_method().unwrap_err();
    assert_eq!(err.message, "Maximum 5 contact methods allowed");
    assert_eq!(draft.contact_methods.len(), MAX_CONTACT_METHODS);
}

#[test]
fn reset_after_submit_restores_prefill() {
    let mut draft = case_page_draft();
    draft.description = "details".to_string();
    draft.name = "Sita".to_string();
    draft.add_contact_method().unwrap();
    draft.remove_contact_method(0);

    draft.reset();
    assert_eq!(draft, case_page_draft());
    assert_eq!(draft.contact_methods.len(), 1);
}

#[test]
fn submission_validator_agrees_with_draft_check() {
    use jawafdehi_types::AppError;
    use validator::Validate;

    let submission = FeedbackDraft::new(FeedbackType::Bug, "", "").to_submission();
    let err: AppError = submission.validate().unwrap_err().into();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("subject"), Some("Subject is required"));
    assert_eq!(err.field_error("description"), Some("Description is required"));
}
