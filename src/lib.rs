//! Typeahead creatable-selection engine
//!
//! The engine (`catalog`, `cursor`, `outside`, `select`) is free of terminal
//! types and can be driven directly. `widgets`, `layout` and `app` put a
//! ratatui front end on top of it.

pub mod app;
pub mod catalog;
pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod layout;
pub mod outside;
pub mod select;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use catalog::{CreationPolicy, OptionCatalog, filter};
pub use error::TypeaheadError;
pub use select::{
    Change, ColorToken, MultiSelect, PaletteSelect, Picker, PickerChange, SelectSettings,
    SingleSelect, Variant, color_for,
};
