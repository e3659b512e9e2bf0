//! HTTP routes for letter endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    clear_letter, copy_letter_text, get_defaults, get_state, list_kinds, preview_letter,
    submit_letter, LetterHandlers,
};

/// Creates the letter router; mount under `/api/letter`.
pub fn letter_routes(handlers: LetterHandlers) -> Router {
    Router::new()
        .route("/", post(submit_letter).get(get_state).delete(clear_letter))
        .route("/defaults", get(get_defaults))
        .route("/kinds", get(list_kinds))
        .route("/preview", post(preview_letter))
        .route("/text", get(copy_letter_text))
        .with_state(handlers)
}
