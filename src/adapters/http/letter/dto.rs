//! Request/response DTOs for the letter endpoints.

use serde::{Deserialize, Serialize};

use crate::application::Superseded;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::generation::{GenerationPhase, GenerationState};
use crate::domain::letter::{LetterText, RenderError, TransactionKind};

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Snapshot of the generation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStateResponse {
    pub status: GenerationPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FailureResponse>,
}

/// Classified failure; `message` is always the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub code: String,
    pub message: String,
}

impl From<&GenerationState> for GenerationStateResponse {
    fn from(state: &GenerationState) -> Self {
        Self {
            status: state.phase(),
            sequence: state.sequence().map(|s| s.value()),
            text: match state {
                GenerationState::Succeeded { text, .. } => Some(text.clone()),
                _ => None,
            },
            error: state.failure().map(|reason| FailureResponse {
                code: reason.code().to_string(),
                message: reason.user_message().to_string(),
            }),
        }
    }
}

/// Returned when a submission finished after a newer one was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersededResponse {
    pub status: String,
    pub sequence: u64,
    pub latest: u64,
}

impl From<Superseded> for SupersededResponse {
    fn from(s: Superseded) -> Self {
        Self {
            status: "superseded".to_string(),
            sequence: s.sequence.value(),
            latest: s.latest.value(),
        }
    }
}

/// Locally rendered letter, before enhancement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub text: String,
}

impl From<LetterText> for PreviewResponse {
    fn from(letter: LetterText) -> Self {
        Self {
            text: letter.into_inner(),
        }
    }
}

/// Form metadata for one transaction kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindResponse {
    pub value: String,
    pub label: String,
    pub price_label: String,
    pub subject_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_label: Option<String>,
}

impl From<TransactionKind> for KindResponse {
    fn from(kind: TransactionKind) -> Self {
        Self {
            value: kind.as_str().to_string(),
            label: kind.label().to_string(),
            price_label: kind.price_label().to_string(),
            subject_label: kind.subject_label().to_string(),
            period_label: kind.period_label().map(str::to_string),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details: err.field().map(|f| serde_json::json!({ "field": f })),
        }
    }

    pub fn render(err: &RenderError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidStateTransition.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self {
            code: ErrorCode::NotFound.to_string(),
            message: format!("{} not found", resource),
            details: None,
        }
    }
}
