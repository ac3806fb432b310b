use super::change::Change;
use super::palette::{ColorToken, color_for};
use super::settings::SelectSettings;
use super::single_state::SingleSelect;
use crate::catalog::OptionCatalog;
use crate::cursor::{Target, target_at};
use crate::outside::{Bounds, PointerRouter, WatchId};

pub const DEFAULT_COLUMNS: usize = 4;
pub const MAX_COLUMNS: usize = 16;

/// Single select over a grid of color swatches
///
/// Same open/commit/cancel rules as `SingleSelect`, but cells are picked by
/// pointer only: there is no arrow-key navigation. Every value, known or not,
/// renders with the color `color_for` resolves.
#[derive(Debug)]
pub struct PaletteSelect {
    select: SingleSelect,
    columns: usize,
}

impl PaletteSelect {
    pub fn new(
        catalog: OptionCatalog,
        value: Option<String>,
        settings: SelectSettings,
        columns: usize,
    ) -> Self {
        Self {
            select: SingleSelect::new(catalog, value, settings),
            columns: columns.clamp(1, MAX_COLUMNS),
        }
    }

    pub fn with_router(mut self, router: PointerRouter) -> Self {
        self.select = self.select.with_router(router);
        self
    }

    pub fn with_on_create(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.select = self.select.with_on_create(hook);
        self
    }

    pub fn catalog(&self) -> &OptionCatalog {
        self.select.catalog()
    }

    pub fn value(&self) -> Option<&str> {
        self.select.value()
    }

    pub fn settings(&self) -> &SelectSettings {
        self.select.settings()
    }

    pub fn is_open(&self) -> bool {
        self.select.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.select.is_focused()
    }

    pub fn query(&self) -> &str {
        self.select.query()
    }

    pub fn visible(&self) -> Vec<&str> {
        self.select.visible()
    }

    pub fn can_create(&self) -> bool {
        self.select.can_create()
    }

    pub fn create_label(&self) -> Option<String> {
        self.select.create_label()
    }

    /// Cells in the grid, the create cell included
    pub fn cell_count(&self) -> usize {
        self.select.row_count()
    }

    /// Cell Enter would commit, None when closed
    pub fn highlighted(&self) -> Option<usize> {
        self.select.highlighted()
    }

    pub fn can_clear(&self) -> bool {
        self.select.can_clear()
    }

    pub fn is_missing_required(&self) -> bool {
        self.select.is_missing_required()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid rows needed for the current cells
    pub fn grid_rows(&self) -> usize {
        self.cell_count().div_ceil(self.columns)
    }

    /// (row, column) of a cell
    pub fn grid_position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Cell index at a grid position, if a cell is there
    pub fn cell_at(&self, row: usize, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        let index = row * self.columns + column;
        (index < self.cell_count()).then_some(index)
    }

    pub fn cell_target(&self, index: usize) -> Option<Target> {
        target_at(index, self.visible().len(), self.can_create())
    }

    /// Color of a cell; the create cell previews the query
    pub fn cell_color(&self, index: usize) -> Option<ColorToken> {
        match self.cell_target(index)? {
            Target::Option(option) => self.visible().get(option).map(|name| color_for(name)),
            Target::Create => Some(color_for(self.query())),
        }
    }

    /// Swatch beside the input: the query while typing, else the value
    pub fn swatch(&self) -> ColorToken {
        if !self.query().trim().is_empty() {
            return color_for(self.query());
        }
        color_for(self.value().unwrap_or_default())
    }

    pub fn open(&mut self) {
        self.select.open();
    }

    pub fn focus(&mut self) {
        self.select.focus();
    }

    pub fn blur(&mut self) {
        self.select.blur();
    }

    pub fn type_str(&mut self, text: &str) {
        self.select.type_str(text);
    }

    pub fn backspace(&mut self) {
        self.select.backspace();
    }

    pub fn set_query(&mut self, query: &str) {
        self.select.set_query(query);
    }

    /// Enter commits the first cell, which is the create cell when nothing matches
    pub fn commit(&mut self) -> Option<Change<Option<String>>> {
        self.select.commit()
    }

    pub fn click(&mut self, index: usize) -> Option<Change<Option<String>>> {
        self.select.click(index)
    }

    pub fn cancel(&mut self) {
        self.select.cancel();
    }

    pub fn dismiss(&mut self, outside: &[WatchId]) -> bool {
        self.select.dismiss(outside)
    }

    pub fn clear(&mut self) -> Option<Change<Option<String>>> {
        self.select.clear()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.select.set_value(value);
    }

    pub fn apply(&mut self, change: &Change<Option<String>>) {
        self.select.apply(change);
    }

    pub fn replace_catalog<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.replace_catalog(values);
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.select.set_bounds(bounds);
    }

    pub fn is_watching(&self) -> bool {
        self.select.is_watching()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.select.set_disabled(disabled);
    }
}

#[cfg(test)]
#[path = "palette_state_tests.rs"]
mod palette_state_tests;
