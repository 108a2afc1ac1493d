//! Error types for aeseh-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Top-level error type for selection and coupling operations
///
/// None of these is expected under correct wiring; the surrounding
/// generational loop should treat them as fatal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AesehError {
    /// An operation that needs at least one solution received none
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A requested count does not fit the available individuals
    #[error("Invalid target size: requested {requested}, available {available}")]
    InvalidTargetSize {
        /// Number of elements requested
        requested: usize,
        /// Number of elements available
        available: usize,
    },

    /// Internal post-condition failed (logic defect)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for selection and coupling operations
pub type EvoResult<T> = Result<T, AesehError>;
