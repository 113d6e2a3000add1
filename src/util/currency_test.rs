use super::*;

#[test]
fn small_amounts_are_ungrouped() {
    assert_eq!(group_indian(0), "0");
    assert_eq!(group_indian(42), "42");
    assert_eq!(group_indian(999), "999");
}

#[test]
fn thousands_group_after_three_digits() {
    assert_eq!(group_indian(1_000), "1,000");
    assert_eq!(group_indian(12_345), "12,345");
}

#[test]
fn lakhs_and_crores_group_by_two() {
    assert_eq!(group_indian(123_456), "1,23,456");
    assert_eq!(group_indian(1_234_567), "12,34,567");
    assert_eq!(group_indian(12_345_678), "1,23,45,678");
}

#[test]
fn format_inr_prefixes_the_rupee_sign() {
    assert_eq!(format_inr(2_499), "\u{20B9}2,499");
    assert_eq!(format_inr(100_000), "\u{20B9}1,00,000");
}
