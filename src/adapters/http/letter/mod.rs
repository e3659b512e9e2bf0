//! HTTP adapter for letter endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, FailureResponse, GenerationStateResponse, KindResponse, PreviewResponse,
    SupersededResponse,
};
pub use handlers::LetterHandlers;
pub use routes::letter_routes;
