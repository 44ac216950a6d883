//! Quoting domain errors
//!
//! Errors here cover table loading only. The calculation itself is
//! total: degenerate inputs produce the zero breakdown, never an error.

use thiserror::Error;

/// Errors that can occur while loading rating or risk tables
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Failed to parse table JSON
    #[error("Failed to parse table: {0}")]
    ParseError(String),

    /// Table file not found or unreadable
    #[error("Table file not found: {0}")]
    FileNotFound(String),
}
