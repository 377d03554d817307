use std::env;

use anyhow::{Context, Result};

/// Primary API key variable; `GEMINI_API_KEY` is accepted as a fallback
pub const API_KEY_ENV: &str = "GLAMSTRIDE_API_KEY";
pub const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";

/// Endpoint override, mainly for tests pointing at a local stub
pub const ENDPOINT_ENV: &str = "GLAMSTRIDE_API_ENDPOINT";

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

// Model selection per capability
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const RESEARCH_MODEL: &str = "gemini-2.5-flash";
pub const STRATEGY_MODEL: &str = "gemini-3-pro-preview";
pub const COPY_MODEL: &str = "gemini-flash-lite-latest";
pub const ASSISTANT_MODEL: &str = "gemini-3-pro-preview";

/// Token budget for the strategy model's thinking phase
pub const STRATEGY_THINKING_BUDGET: u32 = 32768;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub max_retries: u8,
}

impl GatewayConfig {
    /// Resolve configuration from the environment. Fails only when no
    /// API key is set; everything else has defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .or_else(|_| env::var(API_KEY_FALLBACK_ENV))
            .with_context(|| {
                format!("API key not set: export {API_KEY_ENV} (or {API_KEY_FALLBACK_ENV})")
            })?;

        let endpoint =
            env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Ok(Self { api_key, endpoint, timeout_seconds: 120, max_retries: 2 })
    }
}
