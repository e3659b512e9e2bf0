//! LOI Drafter - Letter of Intent generation service
//!
//! Renders a deterministic letter from a transaction description, then asks
//! a language model to polish its wording. Only the most recent submission's
//! outcome is ever shown.
//!
//! Layout follows a hexagonal split:
//! - `domain` - letter templates, amounts, the generation lifecycle
//! - `ports` - traits for the model and clipboard
//! - `adapters` - Gemini/OpenAI providers, clipboard, HTTP surface
//! - `application` - the generation orchestrator
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
