use crate::logging::consts::{
    DEFAULT_LOGGING_BUFFER_SIZE, QUICKWIT_FLUSH_INTERVAL, QUICKWIT_LOGGING_CHANNEL_CAPACITY,
};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use tokio::sync::mpsc;
use tokio::task;
use tracing::field::{Field, Visit};
use tracing_core::Event;
use tracing_core::Subscriber;
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

type LogRecord = serde_json::Map<String, serde_json::Value>;

pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BUFFER_SIZE,
        }
    }

    /// Only events carrying this field are shipped, its value picks the index.
    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        let index_ids = self.marker_to_index.values().cloned().collect();
        QuickwitShipper::new(self.quickwit_url, self.batch_size, index_ids).spawn(receiver);
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

/// Ships events marked with the configured field to Quickwit ingest endpoints.
pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = MarkerFieldVisitor::new(&self.marker_field);
        event.record(&mut visitor);
        visitor
            .marker_value
            .and_then(|value| self.marker_to_index.get(&value).cloned())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        let Some(index_id) = self.index_for(event) else {
            return;
        };
        let mut visitor = LogVisitor::default();
        event.record(&mut visitor);
        visitor.log.insert(
            String::from("level"),
            event.metadata().level().as_str().into(),
        );
        // Logs are dropped rather than blocking the caller when Quickwit can't keep up.
        let _ = self.sender.try_send(QuickwitLogMessage {
            index_id,
            log: visitor.log,
        });
    }
}

struct QuickwitShipper {
    http_client: Client,
    quickwit_url: Url,
    batch_size: usize,
    buffers: HashMap<String, Vec<LogRecord>>,
}

impl QuickwitShipper {
    fn new(quickwit_url: Url, batch_size: usize, index_ids: Vec<String>) -> Self {
        let buffers = index_ids
            .into_iter()
            .map(|index_id| (index_id, Vec::with_capacity(batch_size)))
            .collect();
        Self {
            http_client: Client::new(),
            quickwit_url,
            batch_size,
            buffers,
        }
    }

    fn spawn(mut self, mut receiver: mpsc::Receiver<QuickwitLogMessage>) {
        task::spawn(async move {
            let mut flush_interval = tokio::time::interval(QUICKWIT_FLUSH_INTERVAL);
            loop {
                tokio::select! {
                    message = receiver.recv() => {
                        let Some(QuickwitLogMessage { index_id, log }) = message else {
                            break;
                        };
                        let Some(buffer) = self.buffers.get_mut(&index_id) else {
                            continue;
                        };
                        buffer.push(log);
                        if buffer.len() >= self.batch_size {
                            self.flush(&index_id).await;
                        }
                    }
                    _ = flush_interval.tick() => {
                        let index_ids = self.buffers.keys().cloned().collect::<Vec<_>>();
                        for index_id in index_ids {
                            self.flush(&index_id).await;
                        }
                    }
                }
            }
            let index_ids = self.buffers.keys().cloned().collect::<Vec<_>>();
            for index_id in index_ids {
                self.flush(&index_id).await;
            }
        });
    }

    async fn flush(&mut self, index_id: &str) {
        let Some(buffer) = self.buffers.get_mut(index_id) else {
            return;
        };
        if buffer.is_empty() {
            return;
        }
        let body = match to_ndjson(buffer.drain(..)) {
            Ok(body) => body,
            Err(err) => {
                // `tracing` can't be used from here, the event would come back to this layer.
                eprintln!("Failed to serialize logs for Quickwit index `{index_id}`: {err}");
                return;
            }
        };
        let ingest_url = match self
            .quickwit_url
            .join(&format!("api/v1/{index_id}/ingest"))
        {
            Ok(url) => url,
            Err(err) => {
                eprintln!("Invalid Quickwit ingest URL for index `{index_id}`: {err}");
                return;
            }
        };
        match self.http_client.post(ingest_url).body(body).send().await {
            Ok(response) if !response.status().is_success() => {
                eprintln!(
                    "Quickwit rejected logs for index `{index_id}` with status {}.",
                    response.status()
                );
            }
            Ok(_) => {}
            Err(err) => eprintln!("Failed to ship logs to Quickwit: {err}"),
        }
    }
}

struct MarkerFieldVisitor {
    marker_field: String,
    marker_value: Option<String>,
}

impl MarkerFieldVisitor {
    fn new(marker_field: &str) -> Self {
        Self {
            marker_field: marker_field.to_string(),
            marker_value: None,
        }
    }
}

impl Visit for MarkerFieldVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker_value = Some(value.to_string());
        }
    }
}

#[derive(Default)]
pub(crate) struct LogVisitor {
    pub(crate) log: LogRecord,
}

impl Visit for LogVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        // Quickwit has no 128-bit integers.
        let value = u64::try_from(value).unwrap_or(u64::MAX);
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.log.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.log
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}

#[derive(Debug, Serialize)]
struct QuickwitLogMessage {
    index_id: String,
    log: LogRecord,
}

pub(crate) fn to_ndjson<I>(records: I) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = LogRecord>,
{
    let mut body = Vec::new();
    for record in records {
        serde_json::to_writer(&mut body, &record)?;
        io::Write::write_all(&mut body, b"\n")?;
    }
    Ok(body)
}
