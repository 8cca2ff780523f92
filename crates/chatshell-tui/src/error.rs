//! Error types for the terminal front end.

use thiserror::Error;

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
