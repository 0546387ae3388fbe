use async_trait::async_trait;
use tokio::sync::mpsc;

use super::interface::AudioElement;
use crate::messages::{AudioCommand, ServerMessage};

/// Audio element living in the browser, reached through the session's outbound channel.
///
/// `play` only reports whether the command was delivered; the page reports autoplay
/// rejections separately and those never change the view.
#[derive(Debug, Clone)]
pub struct ChannelAudioElement {
    outbound: mpsc::UnboundedSender<ServerMessage>,
}

impl ChannelAudioElement {
    pub fn new(outbound: mpsc::UnboundedSender<ServerMessage>) -> Self {
        Self { outbound }
    }

    fn send(&self, command: AudioCommand, src: Option<&str>) -> Result<(), anyhow::Error> {
        self.outbound.send(ServerMessage::AudioCommand {
            command,
            src: src.map(str::to_string),
        })?;
        Ok(())
    }
}

#[async_trait]
impl AudioElement for ChannelAudioElement {
    async fn load(&self, src: &str) -> Result<(), anyhow::Error> {
        self.send(AudioCommand::Load, Some(src))
    }

    async fn play(&self) -> Result<(), anyhow::Error> {
        self.send(AudioCommand::Play, None)
    }
}
