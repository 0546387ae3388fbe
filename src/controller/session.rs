use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use super::state::UiState;
use super::translate_controller::TranslateController;
use crate::messages::ServerMessage;
use crate::playback::PlaybackTrigger;
use crate::translate::TranslationService;
use crate::view::ViewModel;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission is disabled")]
    Disabled,
    #[error("response superseded by a newer submission")]
    Superseded,
}

/// One page session: controller state plus its collaborators.
///
/// The controller lock is never held across a network call.
pub struct Session {
    controller: Mutex<TranslateController>,
    service: Arc<dyn TranslationService>,
    outbound: mpsc::UnboundedSender<ServerMessage>,
    playback: PlaybackTrigger,
}

impl Session {
    pub fn new(
        controller: TranslateController,
        service: Arc<dyn TranslationService>,
        outbound: mpsc::UnboundedSender<ServerMessage>,
        playback: PlaybackTrigger,
    ) -> Self {
        Self {
            controller: Mutex::new(controller),
            service,
            outbound,
            playback,
        }
    }

    pub async fn view(&self) -> ViewModel {
        ViewModel::from_controller(&*self.controller.lock().await)
    }

    pub async fn state(&self) -> UiState {
        self.controller.lock().await.state().clone()
    }

    async fn is_current_result(&self, seq: u64) -> bool {
        self.controller.lock().await.is_current_result(seq)
    }

    pub async fn push_view(&self) {
        let view = self.view().await;
        if self.outbound.send(ServerMessage::View(view)).is_err() {
            debug!("Session outbound channel closed, dropping view");
        }
    }

    /// Fetch the catalog once and apply it
    pub async fn load_catalog(&self) {
        let outcome = self.service.languages().await;
        if let Err(e) = &outcome {
            warn!("Failed to load language catalog: {}", e);
        }
        self.controller.lock().await.apply_catalog(outcome);
        self.push_view().await;
    }

    pub async fn set_text(&self, text: String) {
        self.controller.lock().await.set_text(text);
        self.push_view().await;
    }

    pub async fn select_language(&self, code: &str) -> bool {
        let selected = self.controller.lock().await.select_target(code);
        self.push_view().await;
        selected
    }

    /// Run one translate+TTS round trip for the current form
    pub async fn submit(&self) -> Result<UiState, SubmitError> {
        let submission = self
            .controller
            .lock()
            .await
            .begin_submission()
            .ok_or(SubmitError::Disabled)?;
        debug!("Submission #{} started", submission.seq);
        self.push_view().await;

        let outcome = self.service.translate_tts(&submission.request).await;
        if let Err(e) = &outcome {
            warn!("Translate request #{} failed: {}", submission.seq, e);
        }

        let (state, audio_url) = {
            let mut controller = self.controller.lock().await;
            if !controller.complete_submission(submission.seq, outcome) {
                return Err(SubmitError::Superseded);
            }
            let state = controller.state().clone();
            let audio_url = state
                .result()
                .and_then(|r| r.playable_audio_url())
                .map(str::to_string);
            (state, audio_url)
        };
        self.push_view().await;

        if let Some(url) = audio_url {
            let seq = submission.seq;
            self.playback
                .trigger(&url, || self.is_current_result(seq))
                .await;
        }
        Ok(state)
    }
}
