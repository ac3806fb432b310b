use super::{OptionCatalog, eq_ignore_case};

/// Decides whether the current query may be minted as a new option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationPolicy {
    /// Creation switched on by configuration
    pub enabled: bool,
    /// Selection cap, only meaningful for the multi-select
    pub max_selected: Option<usize>,
}

impl Default for CreationPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CreationPolicy {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            max_selected: None,
        }
    }

    pub fn with_max_selected(mut self, max_selected: Option<usize>) -> Self {
        self.max_selected = max_selected;
        self
    }

    /// Whether `selected_len` values already reach the cap
    pub fn is_full(&self, selected_len: usize) -> bool {
        self.max_selected.is_some_and(|max| selected_len >= max)
    }

    /// The trimmed query, if it is worth creating at all
    pub fn candidate(query: &str) -> Option<&str> {
        let trimmed = query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Gate for the "create new value" row
    ///
    /// `selected` holds the values that count as already chosen: the tags of
    /// a multi-select, or the current value of a single select (so an
    /// out-of-catalog initial value is not offered for creation again).
    pub fn can_create(&self, catalog: &OptionCatalog, query: &str, selected: &[String]) -> bool {
        if !self.enabled || self.is_full(selected.len()) {
            return false;
        }

        let Some(candidate) = Self::candidate(query) else {
            return false;
        };

        !catalog.contains(candidate) && !selected.iter().any(|value| eq_ignore_case(value, candidate))
    }
}

#[cfg(test)]
#[path = "creation_tests.rs"]
mod creation_tests;
