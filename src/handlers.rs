use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::controller::{Session, SubmitError};
use crate::messages::ClientMessage;

/// Dispatch one text frame from the page.
///
/// Submissions run on `tasks` so the socket keeps reading while a request is in flight.
pub async fn handle_message(
    session: &Arc<Session>,
    session_uid: &str,
    text: &str,
    tasks: &mut JoinSet<()>,
) -> anyhow::Result<()> {
    // Parse the frame, then the typed message
    let raw: Value = serde_json::from_str(text)?;
    let msg: ClientMessage = match serde_json::from_value(raw.clone()) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Unknown message from {}: {:?} ({})", session_uid, raw.get("type"), e);
            return Ok(());
        }
    };

    match msg {
        ClientMessage::SetText { text } => {
            session.set_text(text).await;
        }
        ClientMessage::SelectLanguage { code } => {
            if !session.select_language(&code).await {
                debug!("Session {} selected unknown language {}", session_uid, code);
            }
        }
        ClientMessage::Submit => {
            // Run in the background so the socket keeps reading
            let session = session.clone();
            let uid = session_uid.to_string();
            tasks.spawn(async move {
                match session.submit().await {
                    Ok(state) => debug!("Session {} submission finished: {:?}", uid, state),
                    Err(SubmitError::Disabled) => {
                        debug!("Session {} submit ignored while disabled", uid)
                    }
                    Err(SubmitError::Superseded) => {
                        info!("Session {} dropped a superseded response", uid)
                    }
                }
            });
        }
        ClientMessage::AudioPlayRejected { reason } => {
            // Manual play control remains; nothing to update
            debug!(
                "Session {} autoplay rejected: {}",
                session_uid,
                reason.as_deref().unwrap_or("unknown")
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::messages::ServerMessage;
    use crate::state::AppState;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn set_text_updates_view_and_unknown_types_are_ignored() {
        let mut config = Config::default();
        config.backend_config.base_url = "http://127.0.0.1:9".to_string();
        let state = AppState::new(config);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let session = Arc::new(state.create_session(tx));
        let mut tasks = JoinSet::new();

        handle_message(&session, "test", r#"{"type":"set-text","text":"hello"}"#, &mut tasks)
            .await
            .unwrap();
        match rx.try_recv() {
            Ok(ServerMessage::View(view)) => {
                assert_eq!(view.text, "hello");
                assert!(view.submit_enabled);
            }
            other => panic!("Expected a view, got {:?}", other),
        }

        handle_message(&session, "test", r#"{"type":"fetch-configs"}"#, &mut tasks)
            .await
            .unwrap();
        assert!(rx.try_recv().is_err());
        assert!(tasks.is_empty());

        assert!(handle_message(&session, "test", "not json", &mut tasks).await.is_err());
    }
}
