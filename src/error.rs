//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.
//!
//! Builder calls validate before touching the label buffer, so an `Err`
//! from any [`Label`](crate::label::Label) method means nothing was appended.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// A parameter outside its enumerated or allowed domain
    /// (justification, orientation, color, font, name, rounding, barcode type)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A recognised but unimplemented feature, e.g. binary graphic compression
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Image loading or decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Label preview service error
    #[error("Preview error: {0}")]
    Preview(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EtiquetaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias used by every fallible etiqueta call.
pub type Result<T> = std::result::Result<T, EtiquetaError>;
