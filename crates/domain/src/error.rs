//! Unified error type for the domain layer
//!
//! Provides a common error type usable across all domain operations,
//! so adapters are not forced into String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required input is missing or invalid. The message is user-facing
    /// and shown verbatim in validation notices.
    #[error("{0}")]
    Validation(String),

    /// A closed enum value could not be parsed from its wire name
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for violated submission invariants.
    ///
    /// Use this when required free-text fields are empty or
    /// whitespace-only.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error for unknown enum wire names
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
