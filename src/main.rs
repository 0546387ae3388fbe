use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use translate_speak::config::Config;
use translate_speak::routes;
use translate_speak::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translate_speak=debug,tower_http=debug")),
        )
        .init();

    let (config, loaded_path) = Config::discover()?;
    match loaded_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!(
            "No config file found (tried {:?}), using defaults",
            Config::candidate_paths()
        ),
    }
    info!("Backend: {}", config.backend_config.base_url);

    let app_state = AppState::new(config.clone());
    let app = routes::create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system_config.host, config.system_config.port)
        .parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
