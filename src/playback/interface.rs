use async_trait::async_trait;

/// The page's audio element, driven from the session
#[async_trait]
pub trait AudioElement: Send + Sync {
    /// Point the element at `src` and reload it
    async fn load(&self, src: &str) -> Result<(), anyhow::Error>;

    /// Attempt playback of the loaded source
    async fn play(&self) -> Result<(), anyhow::Error>;
}
