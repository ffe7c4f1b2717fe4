//! Request and response shapes for the generate endpoint.

pub mod generation;

pub use generation::{
    compose_message, GenerationCall, GenerationRequest, GenerationResult, GenerationSettings,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, TOP_K, TOP_P, USER_LABEL,
};
