use super::*;

#[test]
fn category_name_resolves_known_ids() {
    let categories = [
        Category {
            id: "sarees".to_owned(),
            name: "Sarees".to_owned(),
        },
        Category {
            id: "acc".to_owned(),
            name: "Accessories".to_owned(),
        },
    ];
    assert_eq!(category_name(&categories, "acc"), "Accessories");
}

#[test]
fn category_name_falls_back_to_the_id() {
    assert_eq!(category_name(&[], "mystery"), "mystery");
}

#[test]
fn normalize_search_trims_and_drops_blanks() {
    assert_eq!(normalize_search("  silk scarf  "), Some("silk scarf".to_owned()));
    assert_eq!(normalize_search("   "), None);
    assert_eq!(normalize_search(""), None);
}

#[test]
fn default_filter_is_the_full_catalog() {
    assert_eq!(BrowseFilter::default(), BrowseFilter::All);
}
