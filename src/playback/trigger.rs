use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::interface::AudioElement;

/// Reloads the audio element and attempts playback after a fixed delay.
///
/// Best effort: every failure is logged and swallowed, the manual play
/// control on the page is always available.
#[derive(Clone)]
pub struct PlaybackTrigger {
    element: Arc<dyn AudioElement>,
    delay: Duration,
}

impl PlaybackTrigger {
    pub fn new(element: Arc<dyn AudioElement>, delay: Duration) -> Self {
        Self { element, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Reload `src`, wait, then play if `still_current` resolves to true.
    ///
    /// `still_current` is evaluated after the delay so a result replaced in
    /// the meantime never starts playing.
    pub async fn trigger<F, Fut>(&self, src: &str, still_current: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        if src.is_empty() {
            return;
        }
        if let Err(e) = self.element.load(src).await {
            debug!("Audio reload failed: {}", e);
            return;
        }
        // no ready signal from the element; give the source swap time to settle
        tokio::time::sleep(self.delay).await;
        if !still_current().await {
            debug!("Skipping autoplay of {}, result was replaced", src);
            return;
        }
        if let Err(e) = self.element.play().await {
            debug!("Autoplay attempt failed: {}", e);
        }
    }
}
