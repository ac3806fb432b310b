use super::filter::eq_ignore_case;

/// Ordered set of known option values
///
/// Values are unique by case-insensitive comparison. Insertion order is the
/// display order. The host may swap the whole list at any time; there is no
/// merging between the old and new lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    entries: Vec<String>,
}

impl OptionCatalog {
    /// Build a catalog, dropping later case-insensitive duplicates and blank entries
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for value in values {
            catalog.insert(value.into());
        }
        catalog
    }

    /// Replace every entry with `values`
    ///
    /// The new list is fully built before it is swapped in, so readers never
    /// observe a partially replaced catalog.
    pub fn replace<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self = Self::new(values);
    }

    /// Append a value unless an equivalent one already exists
    ///
    /// Returns true if the value was added.
    pub fn push(&mut self, value: impl Into<String>) -> bool {
        self.insert(value.into())
    }

    fn insert(&mut self, value: String) -> bool {
        if value.trim().is_empty() || self.contains(&value) {
            return false;
        }
        self.entries.push(value);
        true
    }

    /// Find the stored spelling of a value, ignoring case
    pub fn find(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| eq_ignore_case(entry, value))
            .map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OptionCatalog {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
#[path = "option_catalog_tests.rs"]
mod option_catalog_tests;
