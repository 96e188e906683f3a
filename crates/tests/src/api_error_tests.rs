use jawafdehi_types::{AppError, AppErrorKind, NETWORK_ERROR_MESSAGE};
use pretty_assertions::assert_eq;

#[test]
fn not_found_uses_detail() {
    let err = AppError::from_api_response(404, r#"{"detail": "No Case matches the given query."}"#);
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "No Case matches the given query.");
}

#[test]
fn throttled_request() {
    let err = AppError::from_api_response(
        429,
        r#"{"detail": "Request was throttled. Expected available in 60 seconds."}"#,
    );
    assert_eq!(err.kind, AppErrorKind::RateLimited);
}

#[test]
fn html_error_page_gets_generic_message() {
    let err = AppError::from_api_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Request failed with status 502");
}

#[test]
fn feedback_validation_errors_map_to_form_fields() {
    let body = r#"{
        "description": ["This field may not be blank."],
        "contact_info": {"name": ["Ensure this field has no more than 100 characters."]}
    }"#;
    let err = AppError::from_api_response(400, body);
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_error("description"), Some("This field may not be blank."));
    assert_eq!(
        err.field_error("contact_info.name"),
        Some("Ensure this field has no more than 100 characters.")
    );
    assert_eq!(err.field_error("subject"), None);
}

#[test]
fn bad_request_without_fields() {
    let err = AppError::from_api_response(400, r#"{"detail": "Malformed request."}"#);
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.field_errors.is_empty());
}

#[test]
fn network_failures_read_the_same_everywhere() {
    let err = AppError::network("connection reset by peer");
    assert_eq!(err.friendly_message(), NETWORK_ERROR_MESSAGE);
}
