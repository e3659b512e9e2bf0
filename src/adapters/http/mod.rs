//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full application: letter endpoints under
//! `/api/letter`, a liveness check, request tracing and CORS.

pub mod letter;

pub use letter::{letter_routes, LetterHandlers};

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::GenerationOrchestrator;

/// Builds the application router.
///
/// With no `cors_origins` any origin is allowed (development default).
pub fn app_router(orchestrator: Arc<GenerationOrchestrator>, cors_origins: &[String]) -> Router {
    Router::new()
        .nest("/api/letter", letter_routes(LetterHandlers::new(orchestrator)))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
