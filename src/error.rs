//! Error types for ungdoc library.
//!
//! Rendering and text extraction never fail; malformed documents fall back
//! to fixed markup instead. Errors only come from reading and decoding input
//! and from serializing output.

use std::io;
use thiserror::Error;

/// Result type alias for ungdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or converting documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid Docs API document.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while producing output.
    #[error("Rendering error: {0}")]
    Render(String),
}
