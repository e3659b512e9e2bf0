//! Letter module - the template engine.
//!
//! Maps a [`TransactionDescription`] to deterministic letter-of-intent text
//! for one of three [`TransactionKind`]s.

mod amount;
mod errors;
mod kind;
mod templates;
mod transaction;

pub use amount::Amount;
pub use errors::RenderError;
pub use kind::TransactionKind;
pub use templates::{render, LetterText};
pub use transaction::{TransactionDescription, DATE_FORMAT};
