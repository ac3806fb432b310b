//! Tests for catalog/filter

use super::*;
use proptest::prelude::*;

fn colors() -> OptionCatalog {
    OptionCatalog::new(["Red", "Blue", "Light Blue", "Green"])
}

#[test]
fn test_empty_query_returns_full_catalog() {
    let catalog = colors();
    assert_eq!(filter(&catalog, "", &[]), vec!["Red", "Blue", "Light Blue", "Green"]);
}

#[test]
fn test_infix_match_not_just_prefix() {
    let catalog = colors();
    assert_eq!(filter(&catalog, "lue", &[]), vec!["Blue", "Light Blue"]);
}

#[test]
fn test_match_is_case_insensitive() {
    let catalog = colors();
    assert_eq!(filter(&catalog, "RED", &[]), vec!["Red"]);
    assert_eq!(filter(&catalog, "bLuE", &[]), vec!["Blue", "Light Blue"]);
}

#[test]
fn test_no_match_returns_empty() {
    let catalog = colors();
    assert!(filter(&catalog, "Gre!", &[]).is_empty());
}

#[test]
fn test_whitespace_in_query_is_significant() {
    let catalog = colors();
    assert_eq!(filter(&catalog, "t b", &[]), vec!["Light Blue"]);
}

#[test]
fn test_excluded_values_are_hidden() {
    let catalog = colors();
    let selected = vec!["Blue".to_string()];
    assert_eq!(filter(&catalog, "", &selected), vec!["Red", "Light Blue", "Green"]);
}

#[test]
fn test_exclusion_ignores_case() {
    let catalog = colors();
    let selected = vec!["green".to_string()];
    assert_eq!(filter(&catalog, "", &selected), vec!["Red", "Blue", "Light Blue"]);
}

#[test]
fn test_non_ascii_case_folding() {
    let catalog = OptionCatalog::new(["Ärger", "Öl"]);
    assert_eq!(filter(&catalog, "är", &[]), vec!["Ärger"]);
}

#[test]
fn test_eq_ignore_case() {
    assert!(eq_ignore_case("Red", "red"));
    assert!(eq_ignore_case("ÖL", "öl"));
    assert!(!eq_ignore_case("Red", "Reds"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_filter_matches_lowercase_containment(
        values in prop::collection::vec("[a-zA-Z ]{1,8}", 0..12),
        query in "[a-zA-Z]{0,3}",
    ) {
        let catalog = OptionCatalog::new(values);
        let expected: Vec<&str> = catalog
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&query.to_lowercase()))
            .collect();

        prop_assert_eq!(filter(&catalog, &query, &[]), expected);
    }

    #[test]
    fn prop_empty_query_is_identity(values in prop::collection::vec("[a-z]{1,6}", 0..12)) {
        let catalog = OptionCatalog::new(values);
        let all: Vec<&str> = catalog.iter().collect();
        prop_assert_eq!(filter(&catalog, "", &[]), all);
    }

    #[test]
    fn prop_excluded_values_never_visible(
        values in prop::collection::vec("[a-z]{1,6}", 1..12),
        pick in 0usize..12,
    ) {
        let catalog = OptionCatalog::new(values);
        let excluded = catalog.entries()[pick % catalog.len()].clone();
        let visible = filter(&catalog, "", std::slice::from_ref(&excluded));
        prop_assert!(!visible.contains(&excluded.as_str()));
        prop_assert_eq!(visible.len(), catalog.len() - 1);
    }
}
