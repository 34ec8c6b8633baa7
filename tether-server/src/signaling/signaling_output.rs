use async_trait::async_trait;
use tether_core::{ServerEvent, SessionId};

/// Outbound half of the transport, as seen by the room relay.
///
/// Implementations must not block: the relay calls `deliver` once per
/// recipient and expects it to return whether or not the peer is still there.
/// Undeliverable events are dropped.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    async fn deliver(&self, session_id: &SessionId, event: ServerEvent);
}
