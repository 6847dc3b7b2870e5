use parlance::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, log_format_is_json, sanitize_text,
};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}

#[test]
fn given_blank_text_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_text("  \n "), "[EMPTY]");
}

#[test]
fn given_long_text_when_sanitizing_then_truncates_with_length() {
    let text = "a".repeat(200);
    let result = sanitize_text(&text);

    assert!(result.starts_with(&"a".repeat(80)));
    assert!(result.ends_with("... (200 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_secret() {
    let result = sanitize_text("header Bearer sk-secret123 sent");
    assert_eq!(result, "header Bearer [REDACTED] sent");
}

#[test]
fn given_multiple_secrets_when_sanitizing_then_redacts_each() {
    let result = sanitize_text("api_key=one&token=two");
    assert_eq!(result, "api_key=[REDACTED]&token=[REDACTED]");
}

#[test]
fn given_plain_sentence_when_sanitizing_then_unchanged() {
    assert_eq!(sanitize_text("Where is the station?"), "Where is the station?");
}

#[test]
fn given_log_format_values_when_checking_for_json_then_only_json_matches() {
    assert!(log_format_is_json(Some("json")));
    assert!(log_format_is_json(Some(" Json ")));
    assert!(!log_format_is_json(Some("pretty")));
    assert!(!log_format_is_json(None));
}
