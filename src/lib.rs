//! Verdant library crate (used by the server binary and integration tests).
//!
//! The service loads a pretrained BERT sequence-classification checkpoint
//! once at startup and exposes a single scoring endpoint: `POST /predict`
//! maps a product description to a sustainability index rounded to two
//! decimal places.
//!
//! - [`Config`], [`ConfigError`]: `VERDANT_*` environment configuration
//! - [`SustainabilityScorer`], [`ScorerConfig`]: model and tokenizer, loaded once
//! - [`gateway`]: the Axum router and handlers

pub mod config;
pub mod gateway;
pub mod inference;

pub use config::{Config, ConfigError};
pub use gateway::{HandlerState, VERDANT_STATUS_HEADER, create_router_with_state};
pub use inference::{InferenceError, MAX_SEQ_LEN, ScorerConfig, SustainabilityScorer};
