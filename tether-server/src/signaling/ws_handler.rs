use crate::app::AppState;
use crate::signaling::SignalingOutput;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tether_core::{ClientEvent, RoomId, ServerEvent, SessionId};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let session_id = SessionId::new();
    let room_id = RoomId::stream();
    info!("New WebSocket connection: {}", session_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Welcome is queued before joining so it is always the first frame.
    state.signaling.add_session(session_id.clone(), tx);
    state
        .signaling
        .deliver(
            &session_id,
            ServerEvent::Welcome {
                session_id: session_id.clone(),
            },
        )
        .await;
    state.relay.join(&session_id, &room_id);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = state.relay.clone();
        let session_id = session_id.clone();
        let room_id = room_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => relay.relay_client_event(&session_id, &room_id, event).await,
                        Err(e) => warn!("Invalid frame from {}: {}", session_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    state.signaling.remove_session(&session_id);
    state.relay.leave(&session_id, &room_id).await;
    info!("WebSocket disconnected: {}", session_id);
}
