use std::time::Duration;

pub const DEFAULT_LOGGING_BUFFER_SIZE: usize = 100;
pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 10_000;
/// Partially filled buffers are shipped at least this often.
pub const QUICKWIT_FLUSH_INTERVAL: Duration = Duration::from_secs(10);
