use crate::signaling::SignalingOutput;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tether_core::{ClientEvent, RoomId, ServerEvent, SessionId};
use tracing::{debug, info};

/// Text carried by the departure notification.
pub const PEER_DISCONNECTED_MESSAGE: &str = "The other peer closed the connection.";

/// Room membership registry plus fan-out among members of the same room.
///
/// Each room's member set sits behind its own `DashMap` shard lock. Fan-out
/// copies the recipient list out of the lock before delivering, so delivery
/// never runs while membership is locked.
#[derive(Clone)]
pub struct RoomRelay {
    rooms: Arc<DashMap<RoomId, HashSet<SessionId>>>,
    output: Arc<dyn SignalingOutput>,
}

impl RoomRelay {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
            output,
        }
    }

    /// Adds the session to the room, creating the room on first use.
    /// Joining twice is a no-op.
    pub fn join(&self, session_id: &SessionId, room_id: &RoomId) {
        let inserted = self
            .rooms
            .entry(room_id.clone())
            .or_default()
            .insert(session_id.clone());

        if inserted {
            info!("Session {} joined room '{}'", session_id, room_id);
        }
    }

    /// Removes the session and tells everyone still in the room.
    ///
    /// Unknown sessions are ignored without notifying anyone. The notice does
    /// not say which role left.
    pub async fn leave(&self, session_id: &SessionId, room_id: &RoomId) {
        // The room itself stays registered when its last member leaves.
        let removed = self
            .rooms
            .get_mut(room_id)
            .is_some_and(|mut members| members.remove(session_id));

        if !removed {
            debug!(
                "Ignoring leave of {} from '{}': not a member",
                session_id, room_id
            );
            return;
        }

        info!("Session {} left room '{}'", session_id, room_id);

        let notice = ServerEvent::PeerDisconnected {
            message: PEER_DISCONNECTED_MESSAGE.to_owned(),
        };
        self.relay_to_room(session_id, room_id, notice).await;
    }

    /// Delivers `event` unchanged to every member of the room except `sender`.
    ///
    /// Missing rooms and rooms with nobody else in them are no-ops. A failed
    /// delivery to one recipient does not affect the others.
    pub async fn relay_to_room(&self, sender: &SessionId, room_id: &RoomId, event: ServerEvent) {
        let recipients = self.others(sender, room_id);

        debug!(
            "Relaying '{}' ({}) from {} to {} peer(s)",
            event.name(),
            event.kind().unwrap_or("-"),
            sender,
            recipients.len()
        );

        let Some((last, rest)) = recipients.split_last() else {
            return;
        };
        for recipient in rest {
            self.output.deliver(recipient, event.clone()).await;
        }
        self.output.deliver(last, event).await;
    }

    /// Routes a decoded client frame: start requests become `start-broadcast`
    /// for the others in the room, signals go out as-is.
    pub async fn relay_client_event(&self, sender: &SessionId, room_id: &RoomId, event: ClientEvent) {
        match event {
            ClientEvent::StartBroadcastRequest(command) => {
                info!("Start request from {}: {}", sender, command);
                self.relay_to_room(sender, room_id, ServerEvent::StartBroadcast(command))
                    .await;
            }
            ClientEvent::Signal(payload) => {
                self.relay_to_room(sender, room_id, ServerEvent::Signal(payload))
                    .await;
            }
        }
    }

    /// Snapshot of the current members of a room.
    pub fn members(&self, room_id: &RoomId) -> HashSet<SessionId> {
        self.rooms
            .get(room_id)
            .map(|members| members.value().clone())
            .unwrap_or_default()
    }

    pub fn member_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map_or(0, |members| members.len())
    }

    pub fn contains(&self, session_id: &SessionId, room_id: &RoomId) -> bool {
        self.rooms
            .get(room_id)
            .is_some_and(|members| members.contains(session_id))
    }

    fn others(&self, sender: &SessionId, room_id: &RoomId) -> Vec<SessionId> {
        let Some(members) = self.rooms.get(room_id) else {
            return Vec::new();
        };
        members
            .iter()
            .filter(|member| *member != sender)
            .cloned()
            .collect()
    }
}
