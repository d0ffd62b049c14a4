//! # Error Types
//!
//! This module defines error types used throughout the bitsmith library.

use thiserror::Error;

/// Main error type for bitsmith operations
#[derive(Debug, Error)]
pub enum BitsmithError {
    /// Invalid caller-supplied parameter (cell counts, rotation, row width)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Upstream pixel source failed (image decode, missing file)
    #[error("Source error: {0}")]
    Source(String),

    /// Font loading or discovery error
    #[error("Font error: {0}")]
    Font(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
