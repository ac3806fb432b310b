//! Tests for the color lookup table

use super::*;
use proptest::prelude::*;

#[test]
fn test_known_name_resolves() {
    assert_eq!(color_for("rose"), ColorToken::new(0xf43f5e));
    assert_eq!(color_for("blue").hex(), "#3b82f6");
}

#[test]
fn test_lookup_ignores_case_and_whitespace() {
    assert_eq!(color_for("  Rose "), color_for("rose"));
    assert_eq!(color_for("NAVY"), color_for("navy"));
}

#[test]
fn test_unknown_name_falls_back_to_neutral() {
    assert_eq!(color_for("roze"), ColorToken::NEUTRAL);
    assert_eq!(color_for(""), ColorToken::NEUTRAL);
    assert!(color_for("not a color").is_neutral());
}

#[test]
fn test_gray_spellings_agree() {
    assert_eq!(color_for("gray"), color_for("grey"));
}

#[test]
fn test_table_names_are_lowercase_and_unique() {
    let names: Vec<&str> = named_colors().iter().map(|(name, _)| *name).collect();
    for name in &names {
        assert_eq!(*name, name.to_lowercase());
        assert_eq!(*name, name.trim());
    }
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

#[test]
fn test_table_has_no_neutral_entries() {
    assert!(named_colors().iter().all(|(_, token)| !token.is_neutral()));
}

#[test]
fn test_table_size() {
    assert!(named_colors().len() >= 35);
}

#[test]
fn test_rgb_components() {
    assert_eq!(ColorToken::new(0x102030).rgb(), (0x10, 0x20, 0x30));
}

#[test]
fn test_display_matches_hex() {
    let token = color_for("coral");
    insta::assert_snapshot!(token.to_string(), @"#ff7f50");
    assert_eq!(token.to_string(), token.hex());
}

#[test]
fn test_light_and_dark_swatches() {
    assert!(color_for("white").is_light());
    assert!(color_for("cream").is_light());
    assert!(!color_for("black").is_light());
    assert!(!color_for("navy").is_light());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_lookup_is_total_and_stable(name in ".{0,12}") {
        let token = color_for(&name);
        prop_assert_eq!(token, color_for(&format!("  {}\t", name)));
        let known = named_colors()
            .iter()
            .any(|(known, _)| *known == name.trim().to_lowercase());
        prop_assert_eq!(token.is_neutral(), !known);
    }
}
