use std::time::Duration;

use async_trait::async_trait;
use fanyi_config::translator::TranslatorConfig;
use reqwest::header::USER_AGENT;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Keyless Google translate endpoint (`translate_a/single`)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    client_id: String,
    user_agent: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            client_id: config.client.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, to: &str) -> Result<Translation, TranslateError> {
        let params = [
            ("client", self.client_id.as_str()),
            ("sl", "auto"),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get(&self.api_url)
            .header(USER_AGENT, &self.user_agent)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
            TranslateError::ParseError(format!("Failed to parse response: {}", e))
        })?;

        let (translated, detected) = parse_response(&json)?;
        tracing::debug!("Translated {} chars, detected source '{}'", text.len(), detected);

        Ok(Translation {
            text: translated,
            detected_source: detected,
            to: to.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
        }
    }
}

/// Payload shape: `[[[translated, original, ...], ...], _, detected, ...]`
fn parse_response(json: &serde_json::Value) -> Result<(String, String), TranslateError> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::ParseError("No segments in response".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        let piece = segment
            .get(0)
            .and_then(|t| t.as_str())
            .ok_or_else(|| TranslateError::ParseError(format!("Bad segment: {}", segment)))?;
        translated.push_str(piece);
    }

    let detected = json
        .get(2)
        .and_then(|d| d.as_str())
        .ok_or_else(|| TranslateError::ParseError("No detected language".to_string()))?;

    Ok((translated, detected.to_string()))
}
