use std::time::Duration;

pub const ANSWERS_TO_CLEAR_CHECKPOINT: u32 = 2;

pub const NEXT_QUESTION_DELAY: Duration = Duration::from_millis(1000);
pub const CHECKPOINT_CLEARED_DELAY: Duration = Duration::from_millis(1500);
