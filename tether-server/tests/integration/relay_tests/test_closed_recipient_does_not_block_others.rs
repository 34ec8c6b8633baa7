use axum::extract::ws::Message;
use serde_json::{Value, json};
use std::sync::Arc;
use tether_core::{RoomId, ServerEvent, SessionId};
use tether_server::{RoomRelay, SignalingService};
use tokio::sync::mpsc;

use crate::integration::init_tracing;

fn text_frames(rx: &mut mpsc::UnboundedReceiver<Message>) -> Vec<Value> {
    let mut frames = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        if let Message::Text(text) = msg {
            frames.push(serde_json::from_str(&text).unwrap());
        }
    }
    frames
}

#[tokio::test]
async fn test_closed_recipient_does_not_block_others() {
    init_tracing();

    let signaling = SignalingService::new();
    let relay = RoomRelay::new(Arc::new(signaling.clone()));
    let room = RoomId::stream();

    let ids: Vec<SessionId> = (0..4).map(|_| SessionId::new()).collect();
    let mut receivers = Vec::new();
    for id in &ids {
        let (tx, rx) = mpsc::unbounded_channel();
        signaling.add_session(id.clone(), tx);
        relay.join(id, &room);
        receivers.push(rx);
    }

    // Session 1 went away without leaving yet: its queue is closed.
    let closed = receivers.remove(1);
    drop(closed);

    let offer = json!({"type": "offer", "sdp": "v=0"});
    relay
        .relay_to_room(&ids[0], &room, ServerEvent::Signal(offer.clone()))
        .await;

    let expected = json!({"event": "signal", "data": offer});
    let [sender_rx, live_a, live_b] = receivers.as_mut_slice() else {
        panic!("Expected three open receivers");
    };
    assert!(text_frames(sender_rx).is_empty(), "Sender gets nothing");
    assert_eq!(text_frames(live_a), vec![expected.clone()]);
    assert_eq!(text_frames(live_b), vec![expected]);
}
