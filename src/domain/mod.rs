//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, errors, state machine trait)
//! - `letter` - Transaction descriptions and the letter template engine
//! - `generation` - Request lifecycle state, failure reasons and the enhancement prompt

pub mod foundation;
pub mod generation;
pub mod letter;
