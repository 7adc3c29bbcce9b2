//! Validation error types.

use thiserror::Error;

/// Shape violation in the warranty code field.
///
/// Always recoverable: the user corrects the field and retries. Codes
/// failing these checks are never sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The code does not strip down to exactly 16 characters.
    #[error("code must be 16 letters or digits")]
    Length,

    /// Group structure or a fixed marker character is wrong.
    #[error("code format is invalid")]
    Structure,
}

/// Registration form field identifiers, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CustomerName,
    CustomerPhone,
    CustomerEmail,
    PurchaseDate,
    PurchasePlace,
    CustomerAddress,
    AgreeTerms,
}

/// A single field-level validation failure.
///
/// Violations are collected across the whole form rather than
/// short-circuiting, so every invalid field surfaces at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}
