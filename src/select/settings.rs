use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::catalog::CreationPolicy;

/// Presentation variant chosen by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Plain single-select list
    #[default]
    Default,
    /// Single-select with accent styling
    AccentedSingle,
    /// Multi-select rendered as tags
    AccentedMulti,
    /// Single-select over a color-swatch grid
    Palette,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Default,
        Variant::AccentedSingle,
        Variant::AccentedMulti,
        Variant::Palette,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::AccentedSingle => "accented-single",
            Variant::AccentedMulti => "accented-multi",
            Variant::Palette => "palette",
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Variant::AccentedMulti)
    }

    pub fn is_accented(&self) -> bool {
        matches!(self, Variant::AccentedSingle | Variant::AccentedMulti)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown variant '{}' (expected one of: default, accented-single, accented-multi, palette)",
                    s
                )
            })
    }
}

/// Host-supplied configuration shared by every variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectSettings {
    pub placeholder: String,
    /// Prefix of the create row, rendered as `<label> "<query>"`
    pub create_label: String,
    pub allow_create: bool,
    pub required: bool,
    pub disabled: bool,
    /// Selection cap; only the multi-select honors it
    pub max_selected: Option<usize>,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            placeholder: "Select...".to_string(),
            create_label: "Create".to_string(),
            allow_create: true,
            required: false,
            disabled: false,
            max_selected: None,
        }
    }
}

impl SelectSettings {
    pub(crate) fn single_policy(&self) -> CreationPolicy {
        CreationPolicy::new(self.allow_create)
    }

    pub(crate) fn multi_policy(&self) -> CreationPolicy {
        CreationPolicy::new(self.allow_create).with_max_selected(self.max_selected)
    }

    /// Text of the create row for a candidate value
    pub fn create_row_label(&self, candidate: &str) -> String {
        format!("{} \"{}\"", self.create_label, candidate)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
