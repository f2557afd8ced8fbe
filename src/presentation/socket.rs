use crate::locations::models::GenerationGuard;
use crate::presentation::message_types::ServerSentSocketMessage;
use crate::presentation::{PresentationCommand, Presenter};
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::time::Duration;
use tokio::sync::mpsc;

struct Outgoing {
    command: PresentationCommand,
    guard: Option<GenerationGuard>,
}

/// Forwards presentation commands of one game to every WebSocket attached to it.
///
/// Commands go through an unbounded channel so that the game state machine never waits on
/// the network. The forwarding task ends once the presenter is dropped together with its game.
///
/// Delayed commands are checked against their generation when the forwarding task takes them
/// off the channel. Anything the game sent after a newer generation began is queued behind
/// that point, so a stale command can never be shown after the newer ones.
pub struct SocketPresenter {
    outbox: mpsc::UnboundedSender<Outgoing>,
}

impl SocketPresenter {
    pub fn spawn(game_id: String, sockets: HashMapClientSocketsStorage) -> Self {
        let (outbox, mut inbox) = mpsc::unbounded_channel::<Outgoing>();
        tokio::spawn(async move {
            while let Some(Outgoing { command, guard }) = inbox.recv().await {
                if guard.as_ref().is_some_and(GenerationGuard::is_superseded) {
                    tracing::debug!(game_id = %game_id, "Dropped a superseded command.");
                    continue;
                }
                let message = ServerSentSocketMessage::from(command);
                match serde_json::to_string(&message) {
                    Ok(raw_message) => {
                        let delivered = sockets.broadcast_to_game(&raw_message, &game_id).await;
                        if delivered == 0 {
                            tracing::debug!(
                                game_id = %game_id,
                                "No socket attached, dropped a command."
                            );
                        }
                    }
                    Err(err) => {
                        tracing::error!(
                            game_id = %game_id,
                            "Failed to serialize a command: {err}"
                        );
                    }
                }
            }
        });
        Self { outbox }
    }

    fn send(&self, command: PresentationCommand, guard: Option<GenerationGuard>) {
        if self.outbox.send(Outgoing { command, guard }).is_err() {
            tracing::warn!("Presentation channel is closed.");
        }
    }
}

impl Presenter for SocketPresenter {
    fn present(&self, command: PresentationCommand) {
        self.send(command, None);
    }

    fn present_after(
        &self,
        command: PresentationCommand,
        delay: Duration,
        guard: GenerationGuard,
    ) {
        if delay.is_zero() {
            if !guard.is_superseded() {
                self.send(command, None);
            }
            return;
        }
        let outbox = self.outbox.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The game may be gone by now, nobody is left to show the command to then.
            let _ = outbox.send(Outgoing {
                command,
                guard: Some(guard),
            });
        });
    }
}
