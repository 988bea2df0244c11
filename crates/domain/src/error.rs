//! Unified error types for the domain layer
//!
//! Lookups against the rule tables fail with a [`DomainError`] rather than a
//! panic. Validators in the engine downgrade these misses to warnings, so a
//! `DomainError` never reaches a caller of the validation API.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found in a reference table
    #[error("Entity not found: {entity_type} named {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error for a reference-table miss
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Ability {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "str" => Ok(Self::Str),
    ///             _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("level must be positive");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: level must be positive");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Feat", "Lucky");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Entity not found: Feat named Lucky");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown class: Artificer");
        assert_eq!(err.to_string(), "Parse error: Unknown class: Artificer");
    }
}
