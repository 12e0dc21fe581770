//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures raised at the
/// point of violation. Nothing here is retried; storage concerns belong in the
/// infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was missing or empty (e.g. a nil identifier).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value object rejected its input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A lookup inside an aggregate found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// The object does not offer the capability the caller needs.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A snapshot was requested as a different kind than was produced.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A field-level mapping between a domain object and a snapshot is missing.
    #[error("mapping failed: {0}")]
    Mapping(String),

    /// The operation is declared but has no implementation yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    pub fn mapping(msg: impl Into<String>) -> Self {
        Self::Mapping(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::invariant("duplicate line for ABCD123");
        assert_eq!(err.to_string(), "invariant violated: duplicate line for ABCD123");

        let err = DomainError::type_mismatch("InvoiceDto", "InvoiceItemDto");
        assert_eq!(
            err.to_string(),
            "type mismatch: expected InvoiceDto, found InvoiceItemDto"
        );
    }
}
