//! Selection state machines
//!
//! `SingleSelect`, `MultiSelect` and `PaletteSelect` share one dropdown core
//! (open state, query, highlight cursor, outside watch). None of them mutate
//! the host-owned value: every commit returns a `Change` for the host to apply.

mod change;
mod dropdown;
mod multi_state;
mod palette;
mod palette_state;
mod picker;
mod settings;
mod single_state;

pub use change::{Change, CreateHook};
pub use multi_state::MultiSelect;
pub use palette::{ColorToken, color_for, named_colors};
pub use palette_state::PaletteSelect;
pub use picker::{Picker, PickerChange, PickerKind};
pub use settings::{SelectSettings, Variant};
pub use single_state::SingleSelect;

#[cfg(test)]
#[path = "select/property_tests.rs"]
mod property_tests;
