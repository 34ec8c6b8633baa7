use serde_json::json;
use std::collections::HashSet;
use tether_core::{RoomId, ServerEvent, SessionId};

use crate::integration::{create_test_relay, init_tracing};

#[tokio::test]
async fn test_relay_reaches_everyone_but_sender() {
    init_tracing();

    let (relay, output) = create_test_relay();
    let room = RoomId::stream();
    let members: Vec<SessionId> = (0..5).map(|_| SessionId::new()).collect();
    for m in &members {
        relay.join(m, &room);
    }

    for sender in &members {
        output.clear().await;

        relay
            .relay_to_room(sender, &room, ServerEvent::Signal(json!({"type": "offer"})))
            .await;

        let targets: Vec<SessionId> = output.all().await.into_iter().map(|d| d.to).collect();
        let unique: HashSet<SessionId> = targets.iter().cloned().collect();
        let expected: HashSet<SessionId> =
            members.iter().filter(|m| *m != sender).cloned().collect();

        assert_eq!(targets.len(), members.len() - 1, "No duplicate deliveries");
        assert!(!unique.contains(sender));
        assert_eq!(unique, expected);
    }
}

#[tokio::test]
async fn test_other_rooms_are_untouched() {
    let (relay, output) = create_test_relay();
    let stream = RoomId::stream();
    let other = RoomId::new("side-room");
    let a = SessionId::new();
    let b = SessionId::new();
    let outsider = SessionId::new();
    relay.join(&a, &stream);
    relay.join(&b, &stream);
    relay.join(&outsider, &other);

    relay
        .relay_to_room(&a, &stream, ServerEvent::Signal(json!({"type": "answer"})))
        .await;

    assert_eq!(output.events_for(&b).await.len(), 1);
    assert!(output.events_for(&outsider).await.is_empty());
}

#[tokio::test]
async fn test_per_sender_order_is_preserved() {
    let (relay, output) = create_test_relay();
    let room = RoomId::stream();
    let sender = SessionId::new();
    let receiver = SessionId::new();
    relay.join(&sender, &room);
    relay.join(&receiver, &room);

    for seq in 0..50 {
        relay
            .relay_to_room(
                &sender,
                &room,
                ServerEvent::Signal(json!({"type": "candidate", "seq": seq})),
            )
            .await;
    }

    let seen: Vec<i64> = output
        .events_for(&receiver)
        .await
        .into_iter()
        .filter_map(|e| match e {
            ServerEvent::Signal(data) => data["seq"].as_i64(),
            _ => None,
        })
        .collect();
    assert_eq!(seen, (0..50).collect::<Vec<_>>());
}
