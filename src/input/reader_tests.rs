//! Tests for input reader

use super::*;
use std::path::PathBuf;

#[test]
fn test_read_lines_from_file() {
    let path = PathBuf::from("tests/fixtures/colors.txt");
    let options = OptionReader::read(&OptionSource::File(path)).unwrap();

    assert_eq!(options, vec!["Red", "Blue", "Light Blue", "Green"]);
}

#[test]
fn test_read_json_array_from_file() {
    let path = PathBuf::from("tests/fixtures/colors.json");
    let options = OptionReader::read(&OptionSource::File(path)).unwrap();

    assert_eq!(options, vec!["Rose", "Navy", "Mint"]);
}

#[test]
fn test_file_not_found_returns_io_error() {
    let path = PathBuf::from("tests/fixtures/nonexistent.txt");
    let result = OptionReader::read(&OptionSource::File(path));

    assert!(matches!(result, Err(TypeaheadError::Io(_))));
}

#[test]
fn test_args_are_passed_through() {
    let source = OptionSource::Args(vec!["a".to_string(), "b".to_string()]);
    assert!(source.is_inline());
    assert_eq!(OptionReader::read(&source).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_parse_skips_blank_lines_and_trims() {
    let options = OptionReader::parse("  Red \n\n\tBlue\n   \nGreen").unwrap();
    assert_eq!(options, vec!["Red", "Blue", "Green"]);
}

#[test]
fn test_parse_empty_text() {
    assert!(OptionReader::parse("").unwrap().is_empty());
    assert!(OptionReader::parse("\n\n").unwrap().is_empty());
}

#[test]
fn test_parse_json_scalars() {
    let options = OptionReader::parse(r#"["a", 2, true]"#).unwrap();
    assert_eq!(options, vec!["a", "2", "true"]);
}

#[test]
fn test_parse_json_rejects_nested_values() {
    let err = OptionReader::parse(r#"["a", {"b": 1}]"#).unwrap_err();
    assert!(matches!(err, TypeaheadError::InvalidOptions(_)));
    assert!(err.to_string().contains("index 1"));
}

#[test]
fn test_parse_json_null_entry_is_rejected() {
    let err = OptionReader::parse("[null]").unwrap_err();
    assert!(matches!(err, TypeaheadError::InvalidOptions(_)));
}

#[test]
fn test_bracketed_lines_fall_back_to_line_list() {
    let options = OptionReader::parse("[draft] notes
[final] notes").unwrap();
    assert_eq!(options, vec!["[draft] notes", "[final] notes"]);
}
