use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use log::{debug, error};

use crate::errors::{ProviderError, TranslationError};
use crate::language_utils;
use crate::translation::MachineTranslator;

/// Default public translation endpoint
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Client for the Google Translate web endpoint
///
/// This is the keyless endpoint used by browser extensions. It accepts the
/// codes in the supported language table and answers with a nested JSON
/// array rather than a documented object.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint base URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/translate_a/single", base)
    }

    /// Send a translation request and return the raw JSON body
    async fn request(&self, text: &str, source: &str, target: &str) -> Result<Value, ProviderError> {
        let response = self.client.get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google Translate error ({}): {}", status, error_text);
            return Err(ProviderError::from_status(status.as_u16(), error_text));
        }

        response.json::<Value>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse Google Translate response: {}", e)))
    }

    /// Extract the translated text from a response body
    ///
    /// The body looks like `[[["hola","hello",null,null,1], ...], null, "en"]`;
    /// long inputs are split into several segments that must be joined.
    pub fn extract_text_from_response(body: &Value) -> Result<String, ProviderError> {
        let segments = body.get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("Response has no segment list".to_string()))?;

        let translated: String = segments.iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() && !segments.is_empty() {
            return Err(ProviderError::ParseError("Response segments contain no text".to_string()));
        }

        Ok(translated)
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslate {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslationError> {
        for code in [source, target] {
            if !language_utils::is_supported(code) {
                return Err(TranslationError::UnsupportedLanguage(code.to_string()));
            }
        }

        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let body = self.request(text, source, target).await?;
        let translated = Self::extract_text_from_response(&body)?;
        debug!("Google Translate {} -> {}: {} chars in, {} chars out", source, target, text.len(), translated.len());
        Ok(translated)
    }
}
