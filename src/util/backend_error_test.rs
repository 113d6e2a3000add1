use super::*;

#[test]
fn extracts_top_level_message_field() {
    assert_eq!(
        extract_message(400, r#"{"message": "Invalid activation code"}"#),
        "Invalid activation code"
    );
}

#[test]
fn extracts_nested_error_message_field() {
    assert_eq!(
        extract_message(403, r#"{"error": {"message": "Unauthorized"}}"#),
        "Unauthorized"
    );
}

#[test]
fn passes_plain_text_bodies_through() {
    assert_eq!(
        extract_message(500, "activation code already used"),
        "activation code already used"
    );
}

#[test]
fn falls_back_to_status_for_empty_bodies() {
    assert_eq!(extract_message(502, ""), "request failed: 502");
    assert_eq!(extract_message(502, "   "), "request failed: 502");
}

#[test]
fn falls_back_to_status_for_json_without_message() {
    assert_eq!(extract_message(422, r#"{"code": 7}"#), "request failed: 422");
}
