use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

use super::config::{
    ASSISTANT_MODEL, COPY_MODEL, GatewayConfig, IMAGE_MODEL, RESEARCH_MODEL, STRATEGY_MODEL,
};
use super::requests;
use super::responses;
use crate::models::{AspectRatio, ChatTurn, ResearchFindings, ResearchMode};

/// Base delay for retry backoff (1s, 2s, 4s)
const RETRY_BASE_MS: u64 = 1000;

/// One method per capability. Feature views and CLI commands talk to this
/// trait so tests can substitute a scripted gateway.
pub trait AiGateway {
    /// Generate a product image; returns a `data:image/png;base64,` URI
    fn generate_image(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<String>;

    /// Edit an existing image (passed as a data URI); returns a data URI
    fn edit_image(&self, image_data_uri: &str, instruction: &str) -> Result<String>;

    /// Search-grounded market research
    fn research(&self, query: &str, mode: ResearchMode) -> Result<ResearchFindings>;

    /// Long-form business strategy draft
    fn draft_strategy(&self, brief: &str) -> Result<String>;

    /// Three short marketing lines
    fn quick_copy(&self, topic: &str) -> Result<String>;

    /// Assistant reply given the prior turns and a new message
    fn chat(&self, turns: &[ChatTurn], message: &str) -> Result<String>;
}

/// Blocking HTTP gateway against a Gemini-style `generateContent` API
pub struct HttpGateway {
    cfg: GatewayConfig,
    client: Client,
}

impl HttpGateway {
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { cfg, client })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(GatewayConfig::from_env()?)
    }

    fn send(&self, model: &str, payload: &Value) -> Result<Value> {
        let url = format!("{}/models/{}:generateContent", self.cfg.endpoint, model);

        let mut last_err: Option<anyhow::Error> = None;
        let mut attempt: u8 = 0;
        while attempt <= self.cfg.max_retries {
            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.cfg.api_key)
                .json(payload)
                .send();

            match response {
                Ok(resp) => {
                    let status = resp.status();
                    let body = resp.text().context("Failed to read response body")?;
                    if status.is_success() {
                        return serde_json::from_str(&body)
                            .context("Failed to parse response JSON");
                    }

                    last_err = Some(anyhow!(
                        "{} returned {}: {}",
                        model,
                        status,
                        snippet(&body)
                    ));
                    if should_retry_status(status) && attempt < self.cfg.max_retries {
                        thread::sleep(retry_delay(attempt));
                        attempt += 1;
                        continue;
                    }
                    break;
                }
                Err(e) => {
                    let retryable = e.is_timeout() || e.is_connect();
                    last_err = Some(anyhow!(e).context("Request to AI service failed"));
                    if retryable && attempt < self.cfg.max_retries {
                        thread::sleep(retry_delay(attempt));
                        attempt += 1;
                        continue;
                    }
                    break;
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow!("request failed without detailed error")))
    }
}

impl AiGateway for HttpGateway {
    fn generate_image(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<String> {
        let body = self.send(IMAGE_MODEL, &requests::image_request(prompt, aspect_ratio))?;
        responses::extract_image(&body)
    }

    fn edit_image(&self, image_data_uri: &str, instruction: &str) -> Result<String> {
        let body = self.send(IMAGE_MODEL, &requests::edit_request(image_data_uri, instruction))?;
        responses::extract_image(&body)
    }

    fn research(&self, query: &str, mode: ResearchMode) -> Result<ResearchFindings> {
        let body = self.send(RESEARCH_MODEL, &requests::research_request(query, mode))?;
        Ok(responses::extract_findings(&body))
    }

    fn draft_strategy(&self, brief: &str) -> Result<String> {
        let body = self.send(STRATEGY_MODEL, &requests::strategy_request(brief))?;
        responses::extract_text(&body)
    }

    fn quick_copy(&self, topic: &str) -> Result<String> {
        let body = self.send(COPY_MODEL, &requests::copy_request(topic))?;
        responses::extract_text(&body)
    }

    fn chat(&self, turns: &[ChatTurn], message: &str) -> Result<String> {
        let body = self.send(ASSISTANT_MODEL, &requests::chat_request(turns, message))?;
        responses::extract_text(&body)
    }
}

fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn retry_delay(attempt: u8) -> Duration {
    Duration::from_millis(RETRY_BASE_MS << attempt)
}

/// First line of an error body, bounded, for diagnostics
fn snippet(body: &str) -> &str {
    let line = body.lines().next().unwrap_or("");
    match line.char_indices().nth(200) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_delay_backs_off_exponentially() {
        assert_eq!(retry_delay(0), Duration::from_millis(1000));
        assert_eq!(retry_delay(1), Duration::from_millis(2000));
        assert_eq!(retry_delay(2), Duration::from_millis(4000));
    }

    #[test]
    fn test_should_retry_status() {
        assert!(should_retry_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(should_retry_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(should_retry_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!should_retry_status(StatusCode::BAD_REQUEST));
        assert!(!should_retry_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_snippet_bounds_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(snippet(&long).len(), 200);
        assert_eq!(snippet("short\nsecond line"), "short");
        assert_eq!(snippet(""), "");
    }
}
