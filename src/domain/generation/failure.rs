//! Classified generation failures.

use serde::{Serialize, Serializer};

use crate::domain::foundation::ErrorCode;
use crate::domain::letter::RenderError;

/// The one message shown to users for any failed generation.
pub const USER_FACING_FAILURE_MESSAGE: &str =
    "Failed to generate the Letter of Intent. Please check your input and try again.";

/// Why a generation request ended in the `Failed` state.
///
/// Carries classification only. Provider diagnostics are logged, never
/// stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The local template could not be rendered; no remote call was made.
    TemplateRenderFailed(RenderError),
    /// The enhancement call failed or returned no usable text.
    RemoteCallFailed,
    /// The enhancement call did not finish before the deadline.
    Timeout,
}

impl FailureReason {
    /// Stable snake_case identifier.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::TemplateRenderFailed(_) => "template_render_failed",
            FailureReason::RemoteCallFailed => "remote_call_failed",
            FailureReason::Timeout => "timeout",
        }
    }

    /// Maps the reason onto the shared error code table.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            FailureReason::TemplateRenderFailed(err) => err.code(),
            FailureReason::RemoteCallFailed => ErrorCode::RemoteCallFailed,
            FailureReason::Timeout => ErrorCode::Timeout,
        }
    }

    /// Message safe to show to the user.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_FAILURE_MESSAGE
    }
}

impl Serialize for FailureReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_snake_case() {
        assert_eq!(
            FailureReason::TemplateRenderFailed(RenderError::InvalidAmount("x".into())).code(),
            "template_render_failed"
        );
        assert_eq!(FailureReason::RemoteCallFailed.code(), "remote_call_failed");
        assert_eq!(FailureReason::Timeout.code(), "timeout");
    }

    #[test]
    fn render_failures_keep_the_render_error_code() {
        let reason =
            FailureReason::TemplateRenderFailed(RenderError::UnknownTransactionType("x".into()));
        assert_eq!(reason.error_code(), ErrorCode::UnknownTransactionType);
    }

    #[test]
    fn every_reason_shows_the_same_message() {
        let reasons = [
            FailureReason::TemplateRenderFailed(RenderError::InvalidAmount("abc".into())),
            FailureReason::RemoteCallFailed,
            FailureReason::Timeout,
        ];
        for reason in reasons {
            assert_eq!(reason.user_message(), USER_FACING_FAILURE_MESSAGE);
            assert!(!reason.user_message().contains("abc"));
        }
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&FailureReason::Timeout).unwrap();
        assert_eq!(json, "\"timeout\"");
    }
}
