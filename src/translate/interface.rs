//! Translate+TTS interface - actual implementation lives in the remote backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend_service::BackendError;

/// A language offered by the backend catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub tts_supported: bool,
}

impl Language {
    /// Label shown in the target language selector
    pub fn option_label(&self) -> String {
        if self.tts_supported {
            format!("{} ({}) • TTS", self.name, self.code)
        } else {
            format!("{} ({})", self.name, self.code)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: String,
}

/// Payload returned by `POST /translate_tts` on success
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(default)]
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_lang: String,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub tts_supported: Option<bool>,
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Advisory warning sent alongside an otherwise valid result
    #[serde(default)]
    pub message: Option<String>,
}

impl TranslationResult {
    /// Audio URL, treating an empty string as absent
    pub fn playable_audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn advisory(&self) -> Option<&str> {
        self.message.as_deref().filter(|msg| !msg.is_empty())
    }
}

/// Remote translation and speech synthesis
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Fetch the ordered language catalog
    async fn languages(&self) -> Result<Vec<Language>, BackendError>;

    /// Translate text and synthesize speech for the result
    async fn translate_tts(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, BackendError>;

    /// Whether the backend answers its health probe
    async fn health_check(&self) -> Result<bool, BackendError>;
}
