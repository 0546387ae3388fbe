use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Single page
        .route("/", get(index))

        // WebSocket session
        .route("/client-ws", get(crate::websocket::websocket_handler))

        // Health check
        .route("/api/health", get(health_check))
}

/// Full application with middleware, ready to serve
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let backend_healthy = state.backend.health_check().await.unwrap_or(false);
    Json(json!({
        "status": "ok",
        "backend": backend_healthy,
        "sessions": state.sessions.len()
    }))
}
