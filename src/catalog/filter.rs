use super::OptionCatalog;

/// Compare two values the way the catalog does: Unicode lowercase equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Derive the visible rows for `query`
///
/// Case-insensitive infix match against every catalog entry, catalog order
/// preserved, no ranking. An empty query keeps every entry. Entries equal to
/// one of `exclude` (ignoring case) are dropped, which is how the multi-select
/// hides values that are already tags.
pub fn filter<'a>(catalog: &'a OptionCatalog, query: &str, exclude: &[String]) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();

    catalog
        .iter()
        .filter(|entry| query_lower.is_empty() || entry.to_lowercase().contains(&query_lower))
        .filter(|entry| !exclude.iter().any(|excluded| eq_ignore_case(entry, excluded)))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
