//! Tests for select/settings

use super::*;

#[test]
fn test_variant_parses_every_name() {
    for variant in Variant::ALL {
        assert_eq!(variant.as_str().parse::<Variant>(), Ok(variant));
    }
}

#[test]
fn test_variant_rejects_unknown_name() {
    let err = "swatch".parse::<Variant>().unwrap_err();
    assert!(err.contains("swatch"));
    assert!(err.contains("accented-multi"));
}

#[test]
fn test_variant_deserializes_kebab_case() {
    #[derive(Deserialize)]
    struct Holder {
        variant: Variant,
    }
    let holder: Holder = toml::from_str(r#"variant = "accented-single""#).unwrap();
    assert_eq!(holder.variant, Variant::AccentedSingle);
}

#[test]
fn test_only_accented_multi_is_multi() {
    assert!(Variant::AccentedMulti.is_multi());
    assert!(!Variant::Default.is_multi());
    assert!(!Variant::AccentedSingle.is_multi());
    assert!(!Variant::Palette.is_multi());
}

#[test]
fn test_accented_variants() {
    assert!(Variant::AccentedSingle.is_accented());
    assert!(Variant::AccentedMulti.is_accented());
    assert!(!Variant::Palette.is_accented());
}

#[test]
fn test_default_settings() {
    let settings = SelectSettings::default();
    assert!(settings.allow_create);
    assert!(!settings.required);
    assert!(!settings.disabled);
    assert_eq!(settings.max_selected, None);
}

#[test]
fn test_create_row_label_quotes_candidate() {
    let settings = SelectSettings::default();
    insta::assert_snapshot!(settings.create_row_label("Gre"), @r#"Create "Gre""#);
}

#[test]
fn test_create_row_label_uses_custom_prefix() {
    let settings = SelectSettings {
        create_label: "Add tag".to_string(),
        ..SelectSettings::default()
    };
    assert_eq!(settings.create_row_label("x"), "Add tag \"x\"");
}

#[test]
fn test_multi_policy_carries_cap() {
    let settings = SelectSettings {
        max_selected: Some(2),
        ..SelectSettings::default()
    };
    assert!(settings.multi_policy().is_full(2));
    assert!(!settings.single_policy().is_full(2));
}
