#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn get_item_is_none_outside_the_browser() {
    assert_eq!(get_item("aurum_guest_mode"), None);
}

#[test]
fn set_and_remove_are_noops_but_callable() {
    set_item("aurum_guest_mode", "true");
    remove_item("aurum_guest_mode");
    assert_eq!(get_item("aurum_guest_mode"), None);
}
