//! HTTP handlers for letter endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::GenerationOrchestrator;
use crate::domain::generation::GenerationState;
use crate::domain::letter::{render, TransactionDescription, TransactionKind};

use super::dto::{
    ErrorResponse, GenerationStateResponse, KindResponse, PreviewResponse, SupersededResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct LetterHandlers {
    orchestrator: Arc<GenerationOrchestrator>,
}

impl LetterHandlers {
    pub fn new(orchestrator: Arc<GenerationOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/letter/defaults - Sample form values dated today
pub async fn get_defaults() -> Response {
    (StatusCode::OK, Json(TransactionDescription::sample())).into_response()
}

/// GET /api/letter/kinds - Supported transaction kinds and their labels
pub async fn list_kinds() -> Response {
    let kinds: Vec<KindResponse> = TransactionKind::ALL.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(kinds)).into_response()
}

/// POST /api/letter/preview - Render the template without enhancement
pub async fn preview_letter(Json(description): Json<TransactionDescription>) -> Response {
    if let Err(err) = description.validate_for_submission() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(&err)),
        )
            .into_response();
    }

    match render(&description) {
        Ok(letter) => (StatusCode::OK, Json(PreviewResponse::from(letter))).into_response(),
        Err(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::render(&err)),
        )
            .into_response(),
    }
}

/// POST /api/letter - Submit a description for generation
pub async fn submit_letter(
    State(handlers): State<LetterHandlers>,
    Json(description): Json<TransactionDescription>,
) -> Response {
    if let Err(err) = description.validate_for_submission() {
        tracing::debug!(error = %err, "Rejected letter submission");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(&err)),
        )
            .into_response();
    }

    match handlers.orchestrator.submit(&description).await {
        Ok(state) => (StatusCode::OK, Json(GenerationStateResponse::from(&state))).into_response(),
        Err(superseded) => (
            StatusCode::CONFLICT,
            Json(SupersededResponse::from(superseded)),
        )
            .into_response(),
    }
}

/// GET /api/letter - Current generation state
pub async fn get_state(State(handlers): State<LetterHandlers>) -> Response {
    let state = handlers.orchestrator.state().await;
    (StatusCode::OK, Json(GenerationStateResponse::from(&state))).into_response()
}

/// DELETE /api/letter - Clear the displayed result
pub async fn clear_letter(State(handlers): State<LetterHandlers>) -> Response {
    match handlers.orchestrator.clear().await {
        Ok(state) => (StatusCode::OK, Json(GenerationStateResponse::from(&state))).into_response(),
        Err(err) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(err.to_string())),
        )
            .into_response(),
    }
}

/// GET /api/letter/text - The generated letter as plain text, for copying
pub async fn copy_letter_text(State(handlers): State<LetterHandlers>) -> Response {
    match handlers.orchestrator.state().await {
        GenerationState::Succeeded { text, .. } => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Generated letter")),
        )
            .into_response(),
    }
}
