//! Translation collaborator.
//!
//! Modeled as a capability injected into the report formatter so tests can
//! substitute a double. Any failure is recovered by the caller falling back
//! to the untranslated text; nothing here ever reaches an API response.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TranslateError;

/// Translate a piece of text into a target language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang` (an ISO 639-1 code such as "vi").
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError>;
}

/// Identity translator. Used when translation is disabled and as the
/// default test double.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(
        &self,
        text: &str,
        _target_lang: &str,
    ) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible endpoint.
///
/// The request timeout bounds worst-case latency per translated field; a
/// slow or failing service degrades one field, never the whole report.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    /// Build a client for `endpoint` with a per-request `timeout`.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&TranslateRequest {
                q: text,
                source: "auto",
                target: target_lang,
                format: "text",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "translation request rejected");
            return Err(TranslateError::Api(format!(
                "translation service returned {status}"
            )));
        }

        let body: TranslateResponse = response.json().await?;
        Ok(body.translated_text)
    }
}
