use crate::model::session::SessionId;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a peer sends to the relay.
///
/// On the wire every frame is `{"event": <name>, "data": <payload>}`. The
/// payloads are opaque and travel unchanged to the other room members.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Viewer asks the broadcaster to start producing a stream.
    StartBroadcastRequest(Value),
    /// Offer, answer or ICE candidate for the peer connection.
    Signal(Value),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::StartBroadcastRequest(_) => "start-broadcast-request",
            ClientEvent::Signal(_) => "signal",
        }
    }
}

#[derive(Deserialize)]
struct RawFrame {
    event: String,
    #[serde(default)]
    data: Value,
}

impl<'de> Deserialize<'de> for ClientEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let frame = RawFrame::deserialize(deserializer)?;
        match frame.event.as_str() {
            "start-broadcast-request" => Ok(ClientEvent::StartBroadcastRequest(frame.data)),
            "signal" => Ok(ClientEvent::Signal(frame.data)),
            other => Err(de::Error::unknown_variant(
                other,
                &["start-broadcast-request", "signal"],
            )),
        }
    }
}

/// Frames the relay sends to a peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// First frame on every connection, carries the assigned session id.
    Welcome { session_id: SessionId },
    /// Forwarded start request; `data` is whatever the viewer sent.
    StartBroadcast(Value),
    /// Forwarded negotiation payload.
    Signal(Value),
    /// Another member of the room went away.
    PeerDisconnected { message: String },
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Welcome { .. } => "welcome",
            ServerEvent::StartBroadcast(_) => "start-broadcast",
            ServerEvent::Signal(_) => "signal",
            ServerEvent::PeerDisconnected { .. } => "peer-disconnected",
        }
    }

    /// The `type` tag of a relayed payload, if it carries one. Diagnostics only.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ServerEvent::StartBroadcast(data) | ServerEvent::Signal(data) => {
                data.get("type").and_then(Value::as_str)
            }
            _ => None,
        }
    }
}
