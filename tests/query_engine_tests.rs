//! Query engine behavior over the seeded catalog

use rental_browser::query::{query, BrowseState, FilterCriteria, SortDirection, SortKey, SortSpec};
use rental_browser::{fixtures, Catalog, PropertyType};

fn catalog() -> Catalog {
    Catalog::new(fixtures::load_listings(None).expect("embedded listings parse"))
}

#[test]
fn test_default_view_is_cheapest_first() {
    let catalog = catalog();
    let state = BrowseState::new(catalog.default_criteria(), 6);
    let page = state.current(catalog.listings());

    assert_eq!(page.total_items(), 13);
    assert_eq!(page.total_pages(), 3);
    let prices: Vec<u32> = page.items.iter().map(|l| l.price).collect();
    assert_eq!(prices, vec![350, 400, 450, 650, 700, 750]);
}

#[test]
fn test_walking_pages_covers_catalog_once() {
    let catalog = catalog();
    let criteria = catalog.default_criteria();

    let mut seen = Vec::new();
    for page in 1..=3 {
        let result = query(catalog.listings(), &criteria, SortSpec::default(), page, 6);
        seen.extend(result.items.iter().map(|l| l.id.clone()));
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 13);

    let beyond = query(catalog.listings(), &criteria, SortSpec::default(), 4, 6);
    assert!(beyond.items.is_empty());
}

#[test]
fn test_availability_sort_over_catalog() {
    let catalog = catalog();
    let spec = SortSpec::new(SortKey::Availability, SortDirection::Asc);
    let result = query(catalog.listings(), &catalog.default_criteria(), spec, 1, 13);

    let flags: Vec<bool> = result.items.iter().map(|l| l.available).collect();
    assert_eq!(flags.iter().filter(|a| **a).count(), 9);
    assert!(flags[..9].iter().all(|a| *a));
    assert!(flags[9..].iter().all(|a| !*a));

    // catalog order survives inside each group
    let ids: Vec<&str> = result.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(&ids[9..], &["3", "6", "8", "11"]);

    let desc = query(
        catalog.listings(),
        &catalog.default_criteria(),
        spec.select(SortKey::Availability),
        1,
        13,
    );
    let ids: Vec<&str> = desc.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(&ids[..4], &["3", "6", "8", "11"]);
}

#[test]
fn test_combined_filters() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        available: Some(true),
        property_type: Some(PropertyType::House),
        ..catalog.default_criteria()
    };
    let result = query(catalog.listings(), &criteria, SortSpec::default(), 1, 6);
    let ids: Vec<&str> = result.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["13", "4", "10"]);
}

#[test]
fn test_search_matches_location_only_listing() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        search_term: "whitefield".to_string(),
        ..catalog.default_criteria()
    };
    let result = query(catalog.listings(), &criteria, SortSpec::default(), 1, 6);
    let ids: Vec<&str> = result.items.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "10"]);
}

#[test]
fn test_no_match_reports_zero_pages() {
    let catalog = catalog();
    let criteria = FilterCriteria {
        search_term: "penthouse".to_string(),
        ..catalog.default_criteria()
    };
    let result = query(catalog.listings(), &criteria, SortSpec::default(), 1, 6);
    assert!(result.items.is_empty());
    assert_eq!(result.total_pages(), 0);
    assert!(result.meta.visible_pages().is_empty());
}

#[test]
fn test_reset_restores_full_catalog() {
    let catalog = catalog();
    let mut state = BrowseState::new(catalog.default_criteria(), 6);
    state.update_criteria(|c| {
        c.location = "Jayanagar".to_string();
        c.bedrooms = Some(0);
    });
    assert_eq!(state.current(catalog.listings()).total_items(), 1);

    state.set_criteria(catalog.default_criteria());
    assert_eq!(state.current(catalog.listings()).total_items(), 13);
}
