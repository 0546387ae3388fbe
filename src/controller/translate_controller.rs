use tracing::debug;

use super::catalog::LanguageCatalog;
use super::state::UiState;
use crate::backend_service::BackendError;
use crate::translate::{Language, TranslationRequest, TranslationResult};

/// A request handed out by [`TranslateController::begin_submission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub request: TranslationRequest,
}

/// Form state and request lifecycle for one session
#[derive(Debug, Clone)]
pub struct TranslateController {
    text: String,
    catalog: LanguageCatalog,
    state: UiState,
    last_seq: u64,
}

impl TranslateController {
    pub fn new(default_target: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            catalog: LanguageCatalog::new(default_target),
            state: UiState::Idle,
            last_seq: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn target_lang(&self) -> &str {
        self.catalog.selected()
    }

    pub fn select_target(&mut self, code: &str) -> bool {
        self.catalog.select(code)
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn apply_catalog(&mut self, outcome: Result<Vec<Language>, BackendError>) {
        match outcome {
            Ok(languages) => {
                debug!("Loaded {} languages", languages.len());
                self.catalog.replace(languages);
            }
            Err(e) => {
                debug!("Catalog load failed: {}", e);
                self.catalog.fail();
            }
        }
    }

    /// Submission is disabled while loading or when the text is blank
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && !self.text.trim().is_empty()
    }

    /// Clear the previous result and enter `Loading`
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        self.last_seq += 1;
        self.catalog.clear_notice();
        self.state = UiState::Loading;
        Some(Submission {
            seq: self.last_seq,
            request: TranslationRequest {
                text: self.text.clone(),
                target_lang: self.catalog.selected().to_string(),
            },
        })
    }

    /// Apply a response. Returns false when `seq` was superseded.
    pub fn complete_submission(
        &mut self,
        seq: u64,
        outcome: Result<TranslationResult, BackendError>,
    ) -> bool {
        if seq != self.last_seq || !self.state.is_loading() {
            debug!("Discarding stale response #{} (latest #{})", seq, self.last_seq);
            return false;
        }
        self.state = match outcome {
            Ok(result) => {
                let advisory = result.advisory().map(str::to_string);
                UiState::Success { result, advisory }
            }
            Err(e) => UiState::Failure(e.user_message()),
        };
        true
    }

    /// True while `seq` is the latest submission and its result is on screen
    pub fn is_current_result(&self, seq: u64) -> bool {
        seq == self.last_seq && self.state.result().is_some()
    }

    /// Message for the inline error banner
    pub fn banner(&self) -> Option<&str> {
        self.state.banner().or_else(|| self.catalog.notice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated() -> TranslationResult {
        TranslationResult {
            translated_text: "नमस्ते".to_string(),
            detected_source_lang: "en".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn blank_text_cannot_submit() {
        let mut controller = TranslateController::new("hi");
        controller.set_text("   \n\t");
        assert!(!controller.can_submit());
        assert!(controller.begin_submission().is_none());
        assert_eq!(controller.state(), &UiState::Idle);
    }

    #[test]
    fn loading_disables_second_submission() {
        let mut controller = TranslateController::new("hi");
        controller.set_text("hello");
        let first = controller.begin_submission().unwrap();
        assert_eq!(first.request.text, "hello");
        assert_eq!(first.request.target_lang, "hi");
        assert!(controller.begin_submission().is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut controller = TranslateController::new("hi");
        controller.set_text("hello");
        let first = controller.begin_submission().unwrap();
        assert!(controller.complete_submission(first.seq, Ok(translated())));
        assert!(controller.is_current_result(first.seq));

        let second = controller.begin_submission().unwrap();
        assert!(!controller.is_current_result(first.seq));
        assert!(!controller.complete_submission(first.seq, Ok(translated())));
        assert!(controller.state().is_loading());
        assert!(controller.complete_submission(
            second.seq,
            Err(BackendError::Status {
                status: 500,
                body: "rate limited".to_string(),
            })
        ));
        assert_eq!(controller.banner(), Some("rate limited"));
    }

    #[test]
    fn advisory_is_kept_with_result() {
        let mut controller = TranslateController::new("or");
        controller.set_text("hello");
        let submission = controller.begin_submission().unwrap();
        let result = TranslationResult {
            message: Some("TTS not available for 'or'.".to_string()),
            ..translated()
        };
        controller.complete_submission(submission.seq, Ok(result));
        assert_eq!(controller.banner(), Some("TTS not available for 'or'."));
        assert_eq!(
            controller.state().result().map(|r| r.translated_text.as_str()),
            Some("नमस्ते")
        );
    }

    #[test]
    fn submission_clears_catalog_notice() {
        let mut controller = TranslateController::new("hi");
        controller.apply_catalog(Err(BackendError::Status {
            status: 503,
            body: String::new(),
        }));
        assert!(controller.banner().is_some());
        controller.set_text("hello");
        controller.begin_submission().unwrap();
        assert_eq!(controller.banner(), None);
    }
}
