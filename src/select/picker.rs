use super::change::Change;
use super::multi_state::MultiSelect;
use super::palette_state::PaletteSelect;
use super::settings::{SelectSettings, Variant};
use super::single_state::SingleSelect;
use crate::catalog::OptionCatalog;
use crate::outside::{Bounds, PointerRouter, WatchId};

/// The state machine behind a variant
#[derive(Debug)]
pub enum PickerKind {
    Single(SingleSelect),
    Multi(MultiSelect),
    Palette(PaletteSelect),
}

/// Change notification from whichever machine is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerChange {
    Single(Change<Option<String>>),
    Multi(Change<Vec<String>>),
}

impl PickerChange {
    /// Selected values after the change, in order
    pub fn values(&self) -> Vec<String> {
        match self {
            PickerChange::Single(change) => change.value.iter().cloned().collect(),
            PickerChange::Multi(change) => change.value.clone(),
        }
    }

    pub fn created(&self) -> Option<&str> {
        match self {
            PickerChange::Single(change) => change.created.as_deref(),
            PickerChange::Multi(change) => change.created.as_deref(),
        }
    }
}

/// A typeahead of any variant, driven through one surface
///
/// Operations a variant does not support (arrow keys on the palette, tag
/// removal on a single select) are no-ops.
#[derive(Debug)]
pub struct Picker {
    variant: Variant,
    kind: PickerKind,
}

impl Picker {
    pub fn new(
        variant: Variant,
        catalog: OptionCatalog,
        initial: Vec<String>,
        settings: SelectSettings,
        palette_columns: usize,
    ) -> Self {
        let first = initial.first().cloned();
        let kind = match variant {
            Variant::Default | Variant::AccentedSingle => {
                PickerKind::Single(SingleSelect::new(catalog, first, settings))
            }
            Variant::AccentedMulti => PickerKind::Multi(MultiSelect::new(catalog, initial, settings)),
            Variant::Palette => PickerKind::Palette(PaletteSelect::new(
                catalog,
                first,
                settings,
                palette_columns,
            )),
        };
        Self { variant, kind }
    }

    pub fn with_router(self, router: PointerRouter) -> Self {
        let kind = match self.kind {
            PickerKind::Single(select) => PickerKind::Single(select.with_router(router)),
            PickerKind::Multi(select) => PickerKind::Multi(select.with_router(router)),
            PickerKind::Palette(select) => PickerKind::Palette(select.with_router(router)),
        };
        Self {
            variant: self.variant,
            kind,
        }
    }

    pub fn with_on_create(self, hook: impl FnMut(&str) + 'static) -> Self {
        let kind = match self.kind {
            PickerKind::Single(select) => PickerKind::Single(select.with_on_create(hook)),
            PickerKind::Multi(select) => PickerKind::Multi(select.with_on_create(hook)),
            PickerKind::Palette(select) => PickerKind::Palette(select.with_on_create(hook)),
        };
        Self {
            variant: self.variant,
            kind,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn kind(&self) -> &PickerKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut PickerKind {
        &mut self.kind
    }

    pub fn catalog(&self) -> &OptionCatalog {
        match &self.kind {
            PickerKind::Single(select) => select.catalog(),
            PickerKind::Multi(select) => select.catalog(),
            PickerKind::Palette(select) => select.catalog(),
        }
    }

    pub fn settings(&self) -> &SelectSettings {
        match &self.kind {
            PickerKind::Single(select) => select.settings(),
            PickerKind::Multi(select) => select.settings(),
            PickerKind::Palette(select) => select.settings(),
        }
    }

    /// Current values, in order
    pub fn selected(&self) -> Vec<String> {
        match &self.kind {
            PickerKind::Single(select) => select.value().map(str::to_string).into_iter().collect(),
            PickerKind::Multi(select) => select.values().to_vec(),
            PickerKind::Palette(select) => select.value().map(str::to_string).into_iter().collect(),
        }
    }

    pub fn is_open(&self) -> bool {
        match &self.kind {
            PickerKind::Single(select) => select.is_open(),
            PickerKind::Multi(select) => select.is_open(),
            PickerKind::Palette(select) => select.is_open(),
        }
    }

    pub fn query(&self) -> &str {
        match &self.kind {
            PickerKind::Single(select) => select.query(),
            PickerKind::Multi(select) => select.query(),
            PickerKind::Palette(select) => select.query(),
        }
    }

    pub fn is_missing_required(&self) -> bool {
        match &self.kind {
            PickerKind::Single(select) => select.is_missing_required(),
            PickerKind::Multi(select) => select.is_missing_required(),
            PickerKind::Palette(select) => select.is_missing_required(),
        }
    }

    pub fn is_watching(&self) -> bool {
        match &self.kind {
            PickerKind::Single(select) => select.is_watching(),
            PickerKind::Multi(select) => select.is_watching(),
            PickerKind::Palette(select) => select.is_watching(),
        }
    }

    /// Rows (or cells) in the open dropdown, create row included
    pub fn row_count(&self) -> usize {
        match &self.kind {
            PickerKind::Single(select) => select.row_count(),
            PickerKind::Multi(select) => select.row_count(),
            PickerKind::Palette(select) => select.cell_count(),
        }
    }

    pub fn open(&mut self) {
        match &mut self.kind {
            PickerKind::Single(select) => select.open(),
            PickerKind::Multi(select) => select.open(),
            PickerKind::Palette(select) => select.open(),
        }
    }

    pub fn type_str(&mut self, text: &str) {
        match &mut self.kind {
            PickerKind::Single(select) => select.type_str(text),
            PickerKind::Multi(select) => select.type_str(text),
            PickerKind::Palette(select) => select.type_str(text),
        }
    }

    pub fn backspace(&mut self) {
        match &mut self.kind {
            PickerKind::Single(select) => select.backspace(),
            PickerKind::Multi(select) => select.backspace(),
            PickerKind::Palette(select) => select.backspace(),
        }
    }

    pub fn next(&mut self) {
        match &mut self.kind {
            PickerKind::Single(select) => select.next(),
            PickerKind::Multi(select) => select.next(),
            PickerKind::Palette(_) => {}
        }
    }

    pub fn previous(&mut self) {
        match &mut self.kind {
            PickerKind::Single(select) => select.previous(),
            PickerKind::Multi(select) => select.previous(),
            PickerKind::Palette(_) => {}
        }
    }

    pub fn hover(&mut self, position: usize) {
        match &mut self.kind {
            PickerKind::Single(select) => select.hover(position),
            PickerKind::Multi(select) => select.hover(position),
            PickerKind::Palette(_) => {}
        }
    }

    pub fn commit(&mut self) -> Option<PickerChange> {
        match &mut self.kind {
            PickerKind::Single(select) => select.commit().map(PickerChange::Single),
            PickerKind::Multi(select) => select.commit().map(PickerChange::Multi),
            PickerKind::Palette(select) => select.commit().map(PickerChange::Single),
        }
    }

    /// Pointer commit on a row or grid cell
    pub fn click(&mut self, position: usize) -> Option<PickerChange> {
        match &mut self.kind {
            PickerKind::Single(select) => select.click(position).map(PickerChange::Single),
            PickerKind::Multi(select) => select.click(position).map(PickerChange::Multi),
            PickerKind::Palette(select) => select.click(position).map(PickerChange::Single),
        }
    }

    pub fn cancel(&mut self) {
        match &mut self.kind {
            PickerKind::Single(select) => select.cancel(),
            PickerKind::Multi(select) => select.cancel(),
            PickerKind::Palette(select) => select.cancel(),
        }
    }

    pub fn dismiss(&mut self, outside: &[WatchId]) -> bool {
        match &mut self.kind {
            PickerKind::Single(select) => select.dismiss(outside),
            PickerKind::Multi(select) => select.dismiss(outside),
            PickerKind::Palette(select) => select.dismiss(outside),
        }
    }

    /// Clear the single value, or drop the last tag of a multi-select
    pub fn clear(&mut self) -> Option<PickerChange> {
        match &mut self.kind {
            PickerKind::Single(select) => select.clear().map(PickerChange::Single),
            PickerKind::Multi(select) => select.remove_last().map(PickerChange::Multi),
            PickerKind::Palette(select) => select.clear().map(PickerChange::Single),
        }
    }

    /// Tag remove control; single-value variants ignore it
    pub fn remove(&mut self, value: &str) -> Option<PickerChange> {
        match &self.kind {
            PickerKind::Multi(select) => select.remove(value).map(PickerChange::Multi),
            PickerKind::Single(_) | PickerKind::Palette(_) => None,
        }
    }

    /// Apply a change the host accepted
    pub fn apply(&mut self, change: &PickerChange) {
        match (&mut self.kind, change) {
            (PickerKind::Single(select), PickerChange::Single(change)) => select.apply(change),
            (PickerKind::Palette(select), PickerChange::Single(change)) => select.apply(change),
            (PickerKind::Multi(select), PickerChange::Multi(change)) => select.apply(change),
            (_, change) => log::warn!("ignoring mismatched change {:?}", change),
        }
    }

    pub fn replace_catalog(&mut self, values: Vec<String>) {
        match &mut self.kind {
            PickerKind::Single(select) => select.replace_catalog(values),
            PickerKind::Multi(select) => select.replace_catalog(values),
            PickerKind::Palette(select) => select.replace_catalog(values),
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        match &mut self.kind {
            PickerKind::Single(select) => select.set_bounds(bounds),
            PickerKind::Multi(select) => select.set_bounds(bounds),
            PickerKind::Palette(select) => select.set_bounds(bounds),
        }
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod picker_tests;
