use std::fmt;

use super::change::{Change, CreateHook, mint};
use super::dropdown::Dropdown;
use super::settings::SelectSettings;
use crate::catalog::{OptionCatalog, eq_ignore_case, filter};
use crate::cursor::{Target, target_at};
use crate::outside::{Bounds, PointerRouter, WatchId};

/// Multi-value typeahead rendered as tags
///
/// Shares the open/closed mechanics of the single select, but a commit
/// toggles membership and keeps the dropdown open. Already selected values
/// never appear as rows. An optional cap blocks additions (including
/// creation) once reached; removal always works.
pub struct MultiSelect {
    catalog: OptionCatalog,
    values: Vec<String>,
    settings: SelectSettings,
    dropdown: Dropdown,
    on_create: Option<CreateHook>,
}

impl fmt::Debug for MultiSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelect")
            .field("catalog", &self.catalog)
            .field("values", &self.values)
            .field("open", &self.dropdown.is_open())
            .field("query", &self.dropdown.query())
            .finish_non_exhaustive()
    }
}

impl MultiSelect {
    pub fn new(catalog: OptionCatalog, values: Vec<String>, settings: SelectSettings) -> Self {
        let mut select = Self {
            catalog,
            values: Vec::new(),
            settings,
            dropdown: Dropdown::new(None),
            on_create: None,
        };
        select.set_values(values);
        select
    }

    pub fn with_router(mut self, router: PointerRouter) -> Self {
        self.dropdown = Dropdown::new(Some(router));
        self
    }

    pub fn with_on_create(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.on_create = Some(Box::new(hook));
        self
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn settings(&self) -> &SelectSettings {
        &self.settings
    }

    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.dropdown.is_focused()
    }

    pub fn query(&self) -> &str {
        self.dropdown.query()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.values.iter().any(|v| eq_ignore_case(v, value))
    }

    /// Whether the cap is reached
    pub fn is_full(&self) -> bool {
        self.settings.multi_policy().is_full(self.values.len())
    }

    /// `selected / max`, only when a cap is configured
    pub fn counter(&self) -> Option<String> {
        self.settings
            .max_selected
            .map(|max| format!("{} / {}", self.values.len(), max))
    }

    /// Remaining catalog entries matching the query
    pub fn visible(&self) -> Vec<&str> {
        filter(&self.catalog, self.dropdown.query(), &self.values)
    }

    pub fn can_create(&self) -> bool {
        self.settings
            .multi_policy()
            .can_create(&self.catalog, self.dropdown.query(), &self.values)
    }

    pub fn create_label(&self) -> Option<String> {
        if !self.can_create() {
            return None;
        }
        Some(self.settings.create_row_label(self.dropdown.query().trim()))
    }

    pub fn row_count(&self) -> usize {
        self.visible().len() + usize::from(self.can_create())
    }

    pub fn highlighted(&self) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        self.dropdown.cursor().get(self.row_count())
    }

    pub fn highlighted_target(&self) -> Option<Target> {
        let position = self.highlighted()?;
        target_at(position, self.visible().len(), self.can_create())
    }

    pub fn is_missing_required(&self) -> bool {
        self.settings.required && self.values.is_empty()
    }

    pub fn open(&mut self) {
        if self.settings.disabled {
            return;
        }
        self.dropdown.open();
    }

    pub fn focus(&mut self) {
        self.open();
    }

    pub fn blur(&mut self) {
        self.dropdown.blur();
    }

    pub fn type_str(&mut self, text: &str) {
        if self.settings.disabled || text.is_empty() {
            return;
        }
        self.dropdown.type_str(text);
    }

    pub fn backspace(&mut self) {
        if self.settings.disabled || !self.is_open() {
            return;
        }
        self.dropdown.backspace();
    }

    pub fn set_query(&mut self, query: &str) {
        if self.settings.disabled {
            return;
        }
        self.dropdown.set_query(query);
    }

    pub fn next(&mut self) {
        if !self.is_open() {
            self.open();
            return;
        }
        let rows = self.row_count();
        self.dropdown.cursor_mut().next(rows);
    }

    pub fn previous(&mut self) {
        if !self.is_open() {
            return;
        }
        let rows = self.row_count();
        self.dropdown.cursor_mut().previous(rows);
    }

    pub fn hover(&mut self, position: usize) {
        if !self.is_open() {
            return;
        }
        let rows = self.row_count();
        self.dropdown.cursor_mut().hover(position, rows);
    }

    /// Enter: toggle the highlighted row or create from the query
    ///
    /// The dropdown stays open and the query is cleared so every remaining
    /// option shows again.
    pub fn commit(&mut self) -> Option<Change<Vec<String>>> {
        if self.settings.disabled {
            return None;
        }

        let change = match self.highlighted_target()? {
            Target::Option(index) => {
                let chosen = self.visible().get(index)?.to_string();
                self.toggle(&chosen)?
            }
            Target::Create => {
                let created = mint(
                    &mut self.catalog,
                    self.settings.multi_policy(),
                    self.dropdown.query(),
                    &self.values,
                    self.on_create.as_mut(),
                )?;
                let mut values = self.values.clone();
                values.push(created.clone());
                Change::created(values, created)
            }
        };

        self.dropdown.clear_query();
        Some(change)
    }

    pub fn click(&mut self, position: usize) -> Option<Change<Vec<String>>> {
        if !self.is_open() || position >= self.row_count() {
            return None;
        }
        self.hover(position);
        self.commit()
    }

    /// Add `value` if absent, remove it if present
    ///
    /// Adding past the cap is a no-op.
    pub fn toggle(&self, value: &str) -> Option<Change<Vec<String>>> {
        if self.settings.disabled {
            return None;
        }

        if self.is_selected(value) {
            return self.without(value);
        }

        if self.is_full() {
            log::debug!("toggle {:?} blocked, {} selected", value, self.values.len());
            return None;
        }

        let mut values = self.values.clone();
        values.push(value.to_string());
        log::debug!("added {:?}", value);
        Some(Change::selected(values))
    }

    /// Tag remove control; works whether or not the dropdown is open
    pub fn remove(&self, value: &str) -> Option<Change<Vec<String>>> {
        if self.settings.disabled {
            return None;
        }
        self.without(value)
    }

    /// Remove the most recently added tag
    pub fn remove_last(&self) -> Option<Change<Vec<String>>> {
        let last = self.values.last()?;
        self.remove(last)
    }

    fn without(&self, value: &str) -> Option<Change<Vec<String>>> {
        if !self.is_selected(value) {
            return None;
        }
        let values: Vec<String> = self
            .values
            .iter()
            .filter(|v| !eq_ignore_case(v, value))
            .cloned()
            .collect();
        log::debug!("removed {:?}", value);
        Some(Change::selected(values))
    }

    pub fn cancel(&mut self) {
        self.dropdown.close();
    }

    pub fn dismiss(&mut self, outside: &[WatchId]) -> bool {
        if !self.dropdown.is_watched_by(outside) {
            return false;
        }
        log::debug!("outside press, cancelling");
        self.dropdown.close();
        true
    }

    /// Host update of the controlled set; duplicates collapse
    pub fn set_values(&mut self, values: Vec<String>) {
        self.values.clear();
        for value in values {
            if !value.is_empty() && !self.is_selected(&value) {
                self.values.push(value);
            }
        }
        let rows = self.row_count();
        self.dropdown.cursor_mut().clamp(rows);
    }

    pub fn apply(&mut self, change: &Change<Vec<String>>) {
        self.set_values(change.value.clone());
    }

    pub fn replace_catalog<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog.replace(values);
        let rows = self.row_count();
        self.dropdown.cursor_mut().clamp(rows);
        log::debug!("catalog replaced ({} options)", self.catalog.len());
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.dropdown.set_bounds(bounds);
    }

    pub fn is_watching(&self) -> bool {
        self.dropdown.is_watching()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.settings.disabled = disabled;
        if disabled {
            self.dropdown.blur();
        }
    }
}

#[cfg(test)]
#[path = "multi_state_tests.rs"]
mod multi_state_tests;
