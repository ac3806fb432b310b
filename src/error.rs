use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("No options to pick from.\n\nPass options as arguments, with --file, or pipe them on stdin.")]
    EmptyCatalog,

    #[error("Invalid option list: {0}")]
    InvalidOptions(String),

    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
