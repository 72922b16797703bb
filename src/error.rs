use thiserror::Error;

/// Custom error types for snipdeck
#[derive(Debug, Error)]
pub enum SnipdeckError {
    #[error("Snippet library not found: {0}")]
    LibraryNotFound(String),

    #[error("Invalid snippet library: {0}")]
    InvalidLibrary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
