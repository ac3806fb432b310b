use std::fmt;

use super::change::{Change, CreateHook, mint};
use super::dropdown::Dropdown;
use super::settings::SelectSettings;
use crate::catalog::{OptionCatalog, filter};
use crate::cursor::{Target, target_at};
use crate::outside::{Bounds, PointerRouter, WatchId};

/// Single-value typeahead with optional creation
///
/// States are Closed and Open. Focus, an explicit open request or typing
/// opens; a commit, Escape or an outside press closes. Only commits produce
/// a `Change`.
pub struct SingleSelect {
    catalog: OptionCatalog,
    value: Option<String>,
    settings: SelectSettings,
    dropdown: Dropdown,
    on_create: Option<CreateHook>,
}

impl fmt::Debug for SingleSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleSelect")
            .field("catalog", &self.catalog)
            .field("value", &self.value)
            .field("open", &self.dropdown.is_open())
            .field("query", &self.dropdown.query())
            .finish_non_exhaustive()
    }
}

impl SingleSelect {
    pub fn new(catalog: OptionCatalog, value: Option<String>, settings: SelectSettings) -> Self {
        Self {
            catalog,
            value: value.filter(|v| !v.is_empty()),
            settings,
            dropdown: Dropdown::new(None),
            on_create: None,
        }
    }

    /// Report outside presses through `router` while open
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

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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

    /// Catalog entries matching the query
    pub fn visible(&self) -> Vec<&str> {
        filter(&self.catalog, self.dropdown.query(), &[])
    }

    /// Whether the create row is offered for the current query
    pub fn can_create(&self) -> bool {
        let selected: &[String] = self.value.as_slice();
        self.settings
            .single_policy()
            .can_create(&self.catalog, self.dropdown.query(), selected)
    }

    /// Label of the create row, if it is offered
    pub fn create_label(&self) -> Option<String> {
        if !self.can_create() {
            return None;
        }
        Some(self.settings.create_row_label(self.dropdown.query().trim()))
    }

    /// Length of `visible ++ [create?]`
    pub fn row_count(&self) -> usize {
        self.visible().len() + usize::from(self.can_create())
    }

    /// Highlighted position, None when closed or nothing to highlight
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

    /// Whether the clear control is shown
    pub fn can_clear(&self) -> bool {
        self.value.is_some() && !self.settings.disabled
    }

    pub fn is_missing_required(&self) -> bool {
        self.settings.required && self.value.is_none()
    }

    pub fn open(&mut self) {
        if self.settings.disabled {
            return;
        }
        self.dropdown.open();
    }

    /// Focus alias; entering focus opens the dropdown
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

    /// Enter: select the highlighted row or create from the query
    ///
    /// A no-op when the combined row list is empty.
    pub fn commit(&mut self) -> Option<Change<Option<String>>> {
        if self.settings.disabled {
            return None;
        }

        let change = match self.highlighted_target()? {
            Target::Option(index) => {
                let chosen = self.visible().get(index)?.to_string();
                log::debug!("selected {:?}", chosen);
                Change::selected(Some(chosen))
            }
            Target::Create => {
                let selected: Vec<String> = self.value.iter().cloned().collect();
                let created = mint(
                    &mut self.catalog,
                    self.settings.single_policy(),
                    self.dropdown.query(),
                    &selected,
                    self.on_create.as_mut(),
                )?;
                Change::created(Some(created.clone()), created)
            }
        };

        self.dropdown.close();
        Some(change)
    }

    /// Pointer commit on a row
    pub fn click(&mut self, position: usize) -> Option<Change<Option<String>>> {
        if !self.is_open() || position >= self.row_count() {
            return None;
        }
        self.hover(position);
        self.commit()
    }

    /// Escape: close without touching the value
    pub fn cancel(&mut self) {
        self.dropdown.close();
    }

    /// Cancel if one of the outside presses belongs to this widget
    pub fn dismiss(&mut self, outside: &[WatchId]) -> bool {
        if !self.dropdown.is_watched_by(outside) {
            return false;
        }
        log::debug!("outside press, cancelling");
        self.dropdown.close();
        true
    }

    /// Clear control: empty the value, keep focus, do not open
    pub fn clear(&mut self) -> Option<Change<Option<String>>> {
        if !self.can_clear() {
            return None;
        }
        self.dropdown.close();
        self.dropdown.focus();
        Some(Change::selected(None))
    }

    /// Host update of the controlled value
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value.filter(|v| !v.is_empty());
    }

    pub fn apply(&mut self, change: &Change<Option<String>>) {
        self.set_value(change.value.clone());
    }

    /// Host swap of the option list; query and open state survive
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
#[path = "single_state_tests.rs"]
mod single_state_tests;
