use crate::app_context::{AppContext, RequestContext};
use crate::presentation::message_types::{self, ClientSentSocketMessage, ServerSentSocketMessage};
use crate::storage::interface::IGameStorage;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub async fn ws<GS>(
    ws: WebSocketUpgrade,
    Path(game_id): Path<String>,
    State(app_context): State<AppContext<GS>>,
) -> Response
where
    GS: IGameStorage,
{
    if !app_context.games.exists(&game_id).await {
        return StatusCode::NOT_FOUND.into_response();
    }
    let request_context = RequestContext { game_id };
    ws.on_upgrade(move |socket| async move {
        GameWsHandler::new(app_context, request_context, socket)
            .await
            .on_client_connected()
            .await
    })
}

/// Pumps presentation commands of one game to a client and answers its pings.
pub struct GameWsHandler<GS: IGameStorage> {
    app_context: AppContext<GS>,
    request_context: RequestContext,
    socket_id: usize,
    client_ws_rx: SplitStream<WebSocket>,
}

impl<GS> GameWsHandler<GS>
where
    GS: IGameStorage,
{
    pub async fn new(
        app_context: AppContext<GS>,
        request_context: RequestContext,
        websocket: WebSocket,
    ) -> Self {
        let (mut client_ws_tx, client_ws_rx) = websocket.split();
        let (tx, rx) = mpsc::unbounded_channel();
        let mut rx = UnboundedReceiverStream::new(rx);
        let socket_id = app_context
            .sockets
            .add(&request_context.game_id, tx)
            .await;
        tokio::spawn(async move {
            while let Some(message) = rx.next().await {
                if let Err(err) = client_ws_tx.send(message).await {
                    tracing::debug!(socket_id, "WebSocket send error: {err}");
                    break;
                }
            }
        });
        tracing::info!(
            task = "game_event",
            event = "socket_connected",
            game_id = %request_context.game_id,
            socket_id,
        );
        Self {
            app_context,
            request_context,
            socket_id,
            client_ws_rx,
        }
    }

    pub async fn on_client_connected(mut self) {
        while let Some(result) = self.client_ws_rx.next().await {
            match result {
                Ok(Message::Text(raw_message)) => self.on_new_message(&raw_message).await,
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(socket_id = self.socket_id, "WebSocket error: {err}");
                    break;
                }
            }
        }
        self.on_client_disconnected().await;
    }

    async fn on_new_message(&self, raw_message: &str) {
        let message = match serde_json::from_str::<ClientSentSocketMessage>(raw_message) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(
                    socket_id = self.socket_id,
                    "Ignoring an unknown socket message {raw_message:?}: {err}"
                );
                return;
            }
        };
        match message {
            ClientSentSocketMessage::Ping { .. } => {
                let pong = ServerSentSocketMessage::Pong {
                    r#type: message_types::Pong,
                };
                match serde_json::to_string(&pong) {
                    Ok(raw_pong) => {
                        self.app_context
                            .sockets
                            .send_msg(&raw_pong, self.socket_id)
                            .await
                    }
                    Err(err) => tracing::error!("Failed to serialize a pong: {err}"),
                }
            }
        }
    }

    async fn on_client_disconnected(&self) {
        self.app_context.sockets.remove(self.socket_id).await;
        tracing::info!(
            task = "game_event",
            event = "socket_disconnected",
            game_id = %self.request_context.game_id,
            socket_id = self.socket_id,
        );
    }
}
