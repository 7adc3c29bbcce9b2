//! Widget error types.

use crate::flow::ScreenId;
use thiserror::Error;
use warranty_core::{FieldError, FormatError};

/// Everything that can go wrong while driving the registration flow.
///
/// Nothing here is fatal: every variant leaves the flow in an editable,
/// retry-capable state (the terminal submitted screen is reached only
/// through success).
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The code field failed a local shape check.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// One or more registration fields failed validation.
    #[error("{} registration fields are invalid", .0.len())]
    Invalid(Vec<FieldError>),

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The operation is not available on the current screen.
    #[error("operation not available on the {0} screen")]
    WrongScreen(ScreenId),
}

impl From<reqwest::Error> for WidgetError {
    fn from(e: reqwest::Error) -> Self {
        WidgetError::Network(e.to_string())
    }
}
