//! Option sources for the binary
//!
//! Options come from command-line arguments, a file or piped stdin, either
//! one per line or as a JSON array. File and stdin sources are read on a
//! background thread and delivered as whole lists.

pub mod loader;
mod reader;

pub use loader::{CatalogUpdate, spawn_loader};
pub use reader::{OptionReader, OptionSource};
