use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::{PANEL_FILE, router};
use crate::room::RoomRelay;
use crate::signaling::SignalingService;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Shared handles injected into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub relay: RoomRelay,
}

impl AppState {
    pub fn new() -> Self {
        let signaling = SignalingService::new();
        let relay = RoomRelay::new(Arc::new(signaling.clone()));
        Self { signaling, relay }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound, not yet running signaling server.
pub struct TetherServer {
    listener: TcpListener,
    app: Router,
    state: AppState,
}

impl TetherServer {
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let addr = config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        let state = AppState::new();
        let app = router(state.clone(), &config.static_dir);

        let panel = config.static_dir.join(PANEL_FILE);
        if panel.is_file() {
            info!("Serving panel from {}", panel.display());
        } else {
            warn!("{} not found, /panel will answer 404", panel.display());
        }
        Ok(Self {
            listener,
            app,
            state,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(self) -> Result<(), ServerError> {
        info!("Signaling server listening on http://{}", self.local_addr()?);
        axum::serve(self.listener, self.app)
            .await
            .map_err(ServerError::Serve)
    }
}
