//! Option catalog module
//!
//! Holds the ordered list of known values, the case-insensitive filter that
//! derives the visible rows from a query, and the policy that decides whether
//! the query may be minted as a new value.

mod creation;
mod filter;
mod option_catalog;

pub use creation::CreationPolicy;
pub use filter::{eq_ignore_case, filter};
pub use option_catalog::OptionCatalog;
