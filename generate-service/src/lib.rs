//! generate-service: a single JSON endpoint that forwards prompts to Gemini.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState};
