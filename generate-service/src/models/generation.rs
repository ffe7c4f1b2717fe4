use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::GenerateError;

/// Model used when the request does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-pro";

pub const DEFAULT_TEMPERATURE: f64 = 0.7;

pub const DEFAULT_MAX_TOKENS: i32 = 1024;

/// Nucleus sampling, fixed for every call.
pub const TOP_P: f64 = 0.95;

pub const TOP_K: i32 = 40;

/// Label placed in front of the user's text in the composed message.
pub const USER_LABEL: &str = "Kullanıcı";

const MISSING_PROMPT: &str = "Missing user prompt";

/// Inbound body of `POST /api/generate`.
///
/// Every field is optional at the serde level so that a missing prompt is
/// reported by validation rather than by the JSON extractor. `null` is
/// treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(
        required(message = "Missing user prompt"),
        length(min = 1, message = "Missing user prompt")
    )]
    pub user_prompt: Option<String>,
    pub system_prompt: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i32>,
}

/// Sampling parameters sent with each provider call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f64,
    pub max_output_tokens: i32,
    pub top_p: f64,
    pub top_k: i32,
}

/// A fully resolved provider call: defaults applied, message composed.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationCall {
    pub model: String,
    pub message: String,
    pub settings: GenerationSettings,
}

impl GenerationRequest {
    /// Validate the request and resolve it into a provider call.
    pub fn into_call(self) -> Result<GenerationCall, GenerateError> {
        self.validate().map_err(|_| GenerateError::MissingPrompt)?;

        let user_prompt = match self.user_prompt {
            Some(prompt) if !prompt.is_empty() => prompt,
            _ => return Err(GenerateError::MissingPrompt),
        };

        Ok(GenerationCall {
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            message: compose_message(self.system_prompt.as_deref(), &user_prompt),
            settings: GenerationSettings {
                temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
                top_p: TOP_P,
                top_k: TOP_K,
            },
        })
    }
}

/// Build the single message sent to the provider.
///
/// With a system prompt: `"<system>\n\nKullanıcı: <user>"`. Without one the
/// preamble and blank line are dropped.
pub fn compose_message(system_prompt: Option<&str>, user_prompt: &str) -> String {
    match system_prompt {
        Some(system) => format!("{}\n\n{}: {}", system, USER_LABEL, user_prompt),
        None => format!("{}: {}", USER_LABEL, user_prompt),
    }
}

/// Outbound body of every `/api/generate` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(text.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }

    pub fn missing_prompt() -> Self {
        Self::failure(MISSING_PROMPT)
    }
}
