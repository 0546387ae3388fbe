use std::sync::Arc;
use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::backend_service::BackendServiceClient;
use crate::config::Config;
use crate::controller::{Session, TranslateController};
use crate::messages::ServerMessage;
use crate::playback::{ChannelAudioElement, PlaybackTrigger};
use crate::translate::TranslationService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn TranslationService>,
    pub sessions: Arc<DashMap<String, Arc<Session>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(BackendServiceClient::new(
            config.backend_config.base_url.clone(),
        ));
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: Config, backend: Arc<dyn TranslationService>) -> Self {
        Self {
            config,
            backend,
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_session_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Build a session whose audio element is driven through `outbound`
    pub fn create_session(&self, outbound: mpsc::UnboundedSender<ServerMessage>) -> Session {
        let ui_config = &self.config.ui_config;
        let element = Arc::new(ChannelAudioElement::new(outbound.clone()));
        Session::new(
            TranslateController::new(ui_config.default_target_lang.clone()),
            self.backend.clone(),
            outbound,
            PlaybackTrigger::new(element, ui_config.autoplay_delay()),
        )
    }
}
