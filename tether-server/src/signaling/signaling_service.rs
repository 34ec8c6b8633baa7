use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use std::sync::Arc;
use tether_core::{ServerEvent, SessionId};
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    sessions: DashMap<SessionId, mpsc::UnboundedSender<Message>>,
}

/// Registry of live WebSocket outbound queues, keyed by session.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                sessions: DashMap::new(),
            }),
        }
    }

    pub fn add_session(&self, session_id: SessionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.sessions.insert(session_id, tx);
    }

    pub fn remove_session(&self, session_id: &SessionId) {
        self.inner.sessions.remove(session_id);
    }

    pub fn session_count(&self) -> usize {
        self.inner.sessions.len()
    }

    fn send_event(&self, session_id: &SessionId, event: &ServerEvent) {
        let Some(session) = self.inner.sessions.get(session_id) else {
            warn!(
                "Dropping '{}' for disconnected session {}",
                event.name(),
                session_id
            );
            return;
        };

        match serde_json::to_string(event) {
            Ok(json) => {
                if let Err(e) = session.send(Message::Text(json.into())) {
                    warn!("Failed to queue WS message for {}: {}", session_id, e);
                }
            }
            Err(e) => error!("Failed to serialize '{}': {}", event.name(), e),
        }
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn deliver(&self, session_id: &SessionId, event: ServerEvent) {
        self.send_event(session_id, &event);
    }
}
