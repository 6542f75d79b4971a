use chrono::{DateTime, Utc};
use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid visible window: start={start}, end={end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("unparseable era date `{input}`: {reason}")]
    UnparseableDate { input: String, reason: &'static str },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to load source `{source_name}`: {detail}")]
    SourceLoad { source_name: String, detail: String },
}
