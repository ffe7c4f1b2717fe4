//! HTTP handlers for the generate service.

pub mod generate;
pub mod health;

pub use generate::generate;
pub use health::{health_check, readiness_check};
