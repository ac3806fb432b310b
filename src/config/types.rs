// Configuration type definitions

use serde::Deserialize;

use crate::select::Variant;

pub const DEFAULT_MAX_VISIBLE: usize = 8;
pub const DEFAULT_PALETTE_COLUMNS: usize = 4;

/// Picker behavior section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub variant: Variant,
    pub placeholder: String,
    pub create_label: String,
    pub allow_create: bool,
    /// Rows shown in the dropdown before it scrolls
    pub max_visible: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            variant: Variant::Default,
            placeholder: "Select...".to_string(),
            create_label: "Create".to_string(),
            allow_create: true,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Palette grid section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Clamped to 1..=16 by the grid
    pub columns: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            columns: DEFAULT_PALETTE_COLUMNS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}
