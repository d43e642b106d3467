//! Creative text generation through the Gemini API
//!
//! Both entry points are infallible: network errors, timeouts, bad statuses
//! and unparseable bodies all collapse into a fixed fallback string. A reply
//! that parses but carries no text gets a fallback derived from the input.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shared::{ApiFailure, Component, component_debug, component_warn};

use crate::traits::CreativeText;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Team name used when generation fails
pub const FALLBACK_TEAM_NAME: &str = "Awesome Team";

pub fn team_name_on_failure() -> String {
    FALLBACK_TEAM_NAME.to_string()
}

/// Team name used when the service answers with nothing
pub fn team_name_on_empty(member_names: &[String]) -> String {
    match member_names.first() {
        Some(first) => format!("Team {first}"),
        None => FALLBACK_TEAM_NAME.to_string(),
    }
}

pub fn congratulation_on_failure(winner_name: &str) -> String {
    format!("Congrats {winner_name}!")
}

pub fn congratulation_on_empty(winner_name: &str) -> String {
    format!("Congratulations {winner_name}!")
}

/// Connection settings for the creative-text service
#[derive(Debug, Clone, PartialEq)]
pub struct CreativeTextConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for CreativeTextConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gemini-backed creative text
pub struct GeminiCreativeText {
    client: reqwest::Client,
    config: CreativeTextConfig,
}

impl GeminiCreativeText {
    pub fn new(config: CreativeTextConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &CreativeTextConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and return the trimmed reply text, empty if the reply had none
    async fn generate(&self, prompt: &str) -> Result<String, ApiFailure> {
        let api_key = self.config.api_key.as_deref().ok_or(ApiFailure::MissingApiKey)?;

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": 100,
                "temperature": 0.9
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .timeout(self.config.timeout)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ApiFailure::from_status(response.status().as_u16()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::MalformedResponse(e.to_string()))?;

        let text = response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }

    fn report_failure(context: &str, failure: &ApiFailure) {
        match failure {
            ApiFailure::MissingApiKey => {
                component_debug!(Component::Creative, "No API key, using fallback {}", context);
            }
            other => {
                component_warn!(Component::Creative, "⚠️ Failed to generate {}: {}", context, other);
            }
        }
    }
}

#[async_trait]
impl CreativeText for GeminiCreativeText {
    async fn suggest_group_name(&self, member_names: &[String]) -> String {
        let prompt = format!(
            "Come up with one short, playful team name for a team made up of: {}. Reply with the team name only.",
            member_names.join(", ")
        );

        match self.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => team_name_on_empty(member_names),
            Err(failure) => {
                Self::report_failure("team name", &failure);
                team_name_on_failure()
            }
        }
    }

    async fn suggest_congratulation(&self, winner_name: &str, prize_name: &str) -> String {
        let prompt = format!(
            "Write one short, upbeat sentence congratulating {winner_name} on winning the {prize_name}."
        );

        match self.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => congratulation_on_empty(winner_name),
            Err(failure) => {
                Self::report_failure("congratulation", &failure);
                congratulation_on_failure(winner_name)
            }
        }
    }
}

/// Creative text without any service behind it
///
/// Answers as the service would when it replies with nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCreativeText;

#[async_trait]
impl CreativeText for OfflineCreativeText {
    async fn suggest_group_name(&self, member_names: &[String]) -> String {
        team_name_on_empty(member_names)
    }

    async fn suggest_congratulation(&self, winner_name: &str, _prize_name: &str) -> String {
        congratulation_on_empty(winner_name)
    }
}

/// Pick the Gemini client when a key is configured, the offline one otherwise
pub fn creative_text_from_config(config: CreativeTextConfig) -> Arc<dyn CreativeText> {
    if config.api_key.is_some() {
        Arc::new(GeminiCreativeText::new(config))
    } else {
        Arc::new(OfflineCreativeText)
    }
}
