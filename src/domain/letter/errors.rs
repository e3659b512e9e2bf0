//! Rendering errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Why a transaction description could not be turned into letter text.
///
/// Both variants are detected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The `kind` value is not one of the supported transaction kinds.
    #[error("unknown transaction type: '{0}'")]
    UnknownTransactionType(String),

    /// The monetary amount is not a plain non-negative integer.
    #[error("invalid amount: '{0}' is not a whole, non-negative number")]
    InvalidAmount(String),
}

impl RenderError {
    /// Maps the error onto its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RenderError::UnknownTransactionType(_) => ErrorCode::UnknownTransactionType,
            RenderError::InvalidAmount(_) => ErrorCode::InvalidAmount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_errors_display_offending_value() {
        assert_eq!(
            RenderError::UnknownTransactionType("lease".into()).to_string(),
            "unknown transaction type: 'lease'"
        );
        assert_eq!(
            RenderError::InvalidAmount("abc".into()).to_string(),
            "invalid amount: 'abc' is not a whole, non-negative number"
        );
    }

    #[test]
    fn render_errors_map_to_codes() {
        assert_eq!(
            RenderError::UnknownTransactionType(String::new()).code(),
            ErrorCode::UnknownTransactionType
        );
        assert_eq!(
            RenderError::InvalidAmount(String::new()).code(),
            ErrorCode::InvalidAmount
        );
    }
}
