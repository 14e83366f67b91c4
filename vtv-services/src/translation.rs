//! Article translation
//!
//! The enricher only depends on the [`Translator`] trait. Two
//! implementations ship here: a LibreTranslate HTTP client and a passthrough
//! used when no translation endpoint is configured.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use vtv_news::REQUEST_TIMEOUT;

/// Errors from the translation backend
#[derive(Debug, Error)]
pub enum TranslationError {
    /// HTTP request failed
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    /// API returned an error response
    #[error("Translation API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse API response
    #[error("Translation parse error: {0}")]
    ParseError(String),
}

/// Translates the display fields of an article
#[async_trait]
pub trait Translator: Send + Sync {
    /// Backend name for logs and health output
    fn name(&self) -> &'static str;

    /// Translate a title and an optional description
    async fn translate_article(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<(String, Option<String>), TranslationError>;
}

/// Returns the text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    async fn translate_article(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<(String, Option<String>), TranslationError> {
        Ok((title.to_string(), description.map(str::to_string)))
    }
}

/// LibreTranslate `/translate` request
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// LibreTranslate `/translate` response
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// LibreTranslate API client
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    target: String,
}

impl LibreTranslateClient {
    /// Create a new client translating into `target` (e.g. "vi")
    pub fn new(base_url: String, api_key: Option<String>, target: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            target,
        }
    }

    /// Translate a single piece of text, letting the service detect the source language
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn translate_text(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let request = TranslateRequest {
            q: text,
            source: "auto",
            target: &self.target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::ParseError(e.to_string()))?;

        debug!("Translated {} chars", parsed.translated_text.len());
        Ok(parsed.translated_text)
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    async fn translate_article(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<(String, Option<String>), TranslationError> {
        let translated_title = self.translate_text(title).await?;
        let translated_description = match description {
            Some(d) => Some(self.translate_text(d).await?),
            None => None,
        };
        Ok((translated_title, translated_description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough() {
        let (title, description) = PassthroughTranslator
            .translate_article("Hello", Some("World"))
            .await
            .unwrap();
        assert_eq!(title, "Hello");
        assert_eq!(description.as_deref(), Some("World"));
    }

    #[test]
    fn test_request_body() {
        let request = TranslateRequest {
            q: "Coffee exports",
            source: "auto",
            target: "vi",
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["q"], "Coffee exports");
        assert_eq!(json["target"], "vi");
        assert!(json.get("api_key").is_none());
    }

    #[test]
    fn test_response_body() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "Xuất khẩu cà phê"}"#).unwrap();
        assert_eq!(parsed.translated_text, "Xuất khẩu cà phê");
    }

    #[tokio::test]
    async fn test_blank_text_skips_the_request() {
        // Port 9 is discard; a real request would fail
        let client = LibreTranslateClient::new(
            "http://127.0.0.1:9".to_string(),
            None,
            "vi".to_string(),
        );
        assert_eq!(client.translate_text("  ").await.unwrap(), "  ");
    }
}
