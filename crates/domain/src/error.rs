//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all character sheet
//! operations, so callers never have to fall back to String errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., malformed data on deserialization)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Positional write outside a fixed-length sequence
    #[error("Index {index} out of range for {field} (length {len})")]
    OutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    /// Lookup by key failed
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for data that violates a model invariant.
    ///
    /// # Example
    /// ```ignore
    /// if traits.len() != TRAIT_COUNT {
    ///     return Err(DomainError::validation("personalTraits must have 5 entries"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-range error for a fixed-length field
    pub fn out_of_range(field: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { field, index, len }
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
