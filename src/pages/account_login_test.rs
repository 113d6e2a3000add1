use super::*;

#[test]
fn well_formed_emails_pass_trimmed() {
    assert_eq!(
        validate_email("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn malformed_emails_fail() {
    assert!(validate_email("").is_err());
    assert!(validate_email("user").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@nodot").is_err());
}

#[test]
fn plain_ten_digit_numbers_pass() {
    assert_eq!(validate_phone("9000000001"), Ok("9000000001".to_owned()));
}

#[test]
fn spaces_and_dashes_are_stripped() {
    assert_eq!(validate_phone("90000 000-01"), Ok("9000000001".to_owned()));
}

#[test]
fn short_long_and_alphabetic_inputs_fail() {
    assert!(validate_phone("12345").is_err());
    assert!(validate_phone("123456789012").is_err());
    assert!(validate_phone("90000abc01").is_err());
    assert!(validate_phone("").is_err());
}

#[test]
fn country_prefix_is_rejected_rather_than_guessed() {
    assert!(validate_phone("+919000000001").is_err());
}
