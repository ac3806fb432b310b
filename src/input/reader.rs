use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use serde_json::Value;

use crate::error::TypeaheadError;

/// Where the option list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSource {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl OptionSource {
    /// Whether the list is available immediately, without a background read
    pub fn is_inline(&self) -> bool {
        matches!(self, OptionSource::Args(_))
    }
}

/// Reads option lists
pub struct OptionReader;

impl OptionReader {
    /// Read the raw text of a source and parse it
    pub fn read(source: &OptionSource) -> Result<Vec<String>, TypeaheadError> {
        match source {
            OptionSource::Args(values) => Ok(values.clone()),
            OptionSource::File(path) => {
                let contents = fs::read_to_string(path)?;
                Self::parse(&contents)
            }
            OptionSource::Stdin => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Self::parse(&buffer)
            }
        }
    }

    /// Parse a JSON array of scalars, or fall back to one option per line
    ///
    /// Text that starts with `[` but is not valid JSON is read as lines, so
    /// plain lists like `[draft] notes` still work. Lines are trimmed and
    /// blank lines skipped.
    pub fn parse(text: &str) -> Result<Vec<String>, TypeaheadError> {
        let trimmed = text.trim_start();
        if trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
                return Self::from_json(value);
            }
        }

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn from_json(value: Value) -> Result<Vec<String>, TypeaheadError> {
        let Value::Array(items) = value else {
            return Err(TypeaheadError::InvalidOptions(
                "expected a JSON array".to_string(),
            ));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s),
                Value::Number(n) => Ok(n.to_string()),
                Value::Bool(b) => Ok(b.to_string()),
                other => Err(TypeaheadError::InvalidOptions(format!(
                    "expected a string at index {}, found {}",
                    index, other
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
