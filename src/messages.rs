//! Websocket messages exchanged with the page.

use serde::{Deserialize, Serialize};

use crate::view::ViewModel;

/// Page -> server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    SetText { text: String },
    SelectLanguage { code: String },
    Submit,
    AudioPlayRejected {
        #[serde(default)]
        reason: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCommand {
    Load,
    Play,
}

/// Server -> page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    View(ViewModel),
    AudioCommand {
        command: AudioCommand,
        #[serde(skip_serializing_if = "Option::is_none")]
        src: Option<String>,
    },
}
