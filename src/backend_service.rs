use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::translate::{Language, TranslationRequest, TranslationResult, TranslationService};

pub const REQUEST_FAILED: &str = "Request failed";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; `body` is the raw response text
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// Message shown to the user when a submission fails
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Status { body, .. } if body.is_empty() => REQUEST_FAILED.to_string(),
            BackendError::Status { body, .. } => body.clone(),
            other => {
                let msg = other.to_string();
                if msg.is_empty() {
                    SOMETHING_WENT_WRONG.to_string()
                } else {
                    msg
                }
            }
        }
    }
}

/// HTTP client for the translation + TTS backend
#[derive(Debug, Clone)]
pub struct BackendServiceClient {
    client: Client,
    base_url: String,
}

impl BackendServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_body(response: reqwest::Response) -> Result<String, BackendError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl TranslationService for BackendServiceClient {
    async fn languages(&self) -> Result<Vec<Language>, BackendError> {
        let url = format!("{}/languages", self.base_url);
        debug!("Fetching language catalog from {}", url);
        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response).await?;
        let languages: Vec<Language> = serde_json::from_str(&body)?;
        Ok(languages)
    }

    async fn translate_tts(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, BackendError> {
        let url = format!("{}/translate_tts", self.base_url);
        debug!("Sending translate request: target_lang={}", request.target_lang);
        let response = self.client.post(&url).json(request).send().await?;
        let body = Self::read_body(response).await?;
        let result: TranslationResult = serde_json::from_str(&body)?;
        Ok(result)
    }

    async fn health_check(&self) -> Result<bool, BackendError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}
