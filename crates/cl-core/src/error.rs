//! # CatalogError
//!
//! Centralized error handling for the Cinelog engine. Two classes only:
//! a remote operation failed, or a local precondition rejected the input
//! before any remote call was attempted. There is no fatal class; every
//! failure leaves the store in its prior consistent state.

use thiserror::Error;

/// The primary error type for all catalog operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A gateway operation failed (network error or non-success status).
    /// Carries the operation name and an opaque cause so the store stays
    /// decoupled from transport details.
    #[error("remote operation '{op}' failed: {message}")]
    Remote { op: &'static str, message: String },

    /// A locally-enforced precondition failed (e.g. blank review author).
    /// No remote call was made.
    #[error("validation rejected: {0}")]
    Validation(String),
}

impl CatalogError {
    pub fn remote(op: &'static str, message: impl Into<String>) -> Self {
        Self::Remote {
            op,
            message: message.into(),
        }
    }
}

/// A specialized Result type for catalog logic.
pub type Result<T> = std::result::Result<T, CatalogError>;
