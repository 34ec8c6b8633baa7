use crate::app::AppState;
use crate::signaling::ws_handler;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;

/// Body of the liveness endpoint.
pub const LIVENESS_TEXT: &str = "Signaling server is up. Waiting for connections...";

/// File name of the control panel inside the static directory.
pub const PANEL_FILE: &str = "panel.html";

pub async fn index() -> &'static str {
    LIVENESS_TEXT
}

/// `/` liveness, `/panel` control panel, `/ws` signaling socket.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route_service("/panel", ServeFile::new(static_dir.join(PANEL_FILE)))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}
