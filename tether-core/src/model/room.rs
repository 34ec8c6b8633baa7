use serde::{Deserialize, Serialize};
use std::fmt;

/// The one rendezvous point every connection joins.
pub const STREAM_ROOM: &str = "stream-room";

/// Name of a rendezvous point in the room registry.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The process-wide stream room.
    pub fn stream() -> Self {
        Self::new(STREAM_ROOM)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
