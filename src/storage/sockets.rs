use axum::extract::ws::Message;
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::sync::{atomic::AtomicUsize, Arc};
use tokio::sync::{mpsc, RwLock};

pub static NEXT_SOCKET_ID: AtomicUsize = AtomicUsize::new(1);

struct ClientSocket {
    game_id: String,
    sender: mpsc::UnboundedSender<Message>,
}

/// Open WebSocket connections, each attached to the game it was opened for.
#[derive(Clone, Default)]
pub struct HashMapClientSocketsStorage {
    storage: Arc<RwLock<HashMap<usize, ClientSocket>>>,
}

impl HashMapClientSocketsStorage {
    pub async fn add(&self, game_id: &str, sender: mpsc::UnboundedSender<Message>) -> usize {
        let socket_id = NEXT_SOCKET_ID.fetch_add(1, Ordering::Relaxed);
        let socket = ClientSocket {
            game_id: game_id.to_string(),
            sender,
        };
        self.storage.write().await.insert(socket_id, socket);
        socket_id
    }

    pub async fn remove(&self, socket_id: usize) {
        self.storage.write().await.remove(&socket_id);
    }

    pub async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    pub async fn send_msg(&self, msg: &str, socket_id: usize) {
        let storage_guard = self.storage.read().await;
        let Some(socket) = storage_guard.get(&socket_id) else {
            tracing::warn!(socket_id, "Tried to send a message to an unknown socket.");
            return;
        };
        if socket.sender.send(Message::Text(msg.to_string())).is_err() {
            // The receiving half is gone, the socket's own task cleans it up.
            tracing::warn!(socket_id, "Failed to send a message to a closed socket.");
        }
    }

    /// Sends `msg` to every socket attached to `game_id` and returns how many received it.
    pub async fn broadcast_to_game(&self, msg: &str, game_id: &str) -> usize {
        let mut delivered = 0;
        for (&socket_id, socket) in self.storage.read().await.iter() {
            if socket.game_id != game_id {
                continue;
            }
            if socket.sender.send(Message::Text(msg.to_string())).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!(socket_id, game_id, "Failed to broadcast to a closed socket.");
            }
        }
        delivered
    }
}
