use super::*;

#[test]
fn known_statuses_get_title_case_labels() {
    assert_eq!(status_label("pending"), "Pending");
    assert_eq!(status_label("shipped"), "Shipped");
    assert_eq!(status_label("delivered"), "Delivered");
    assert_eq!(status_label("cancelled"), "Cancelled");
}

#[test]
fn unknown_statuses_pass_through() {
    assert_eq!(status_label("on hold"), "on hold");
}

#[test]
fn epoch_formats_as_first_of_january_1970() {
    assert_eq!(format_order_date(0), "1 Jan 1970");
}

#[test]
fn sample_dates_format_correctly() {
    // 2026-08-06 00:00:00 UTC
    assert_eq!(format_order_date(1_785_974_400_000), "6 Aug 2026");
    // 2024-02-29 12:00:00 UTC (leap day, mid-day remainder ignored)
    assert_eq!(format_order_date(1_709_208_000_000), "29 Feb 2024");
    // 2000-12-31 23:59:59 UTC
    assert_eq!(format_order_date(978_307_199_000), "31 Dec 2000");
}
