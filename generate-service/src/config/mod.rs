use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    /// Override for the Gemini REST endpoint (used by tests and proxies).
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl GenerateConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let request_timeout_secs = match env::var("GENAI_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GENAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?),
            Err(_) => None,
        };

        Ok(GenerateConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: Secret::new(get_env("GOOGLE_API_KEY", None, is_prod)?),
                base_url: get_env("GEMINI_API_BASE", Some(GEMINI_API_BASE), is_prod)?,
                request_timeout_secs,
            },
        })
    }

    /// Provider settings derived from the loaded configuration.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini.api_key.clone(),
            base_url: self.gemini.base_url.clone(),
            timeout: self.gemini.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
