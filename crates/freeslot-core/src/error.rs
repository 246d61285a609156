//! Error types for freeslot operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The load boundary produced no event records at all.
    #[error("no event records available")]
    DataUnavailable,

    /// The merger was handed events that are not sorted ascending by start.
    #[error("unsorted event sequence at position {position}: {start} starts before {previous}")]
    PreconditionViolation {
        /// Zero-based index of the out-of-order event.
        position: usize,
        /// Start of the event preceding it.
        previous: NaiveDateTime,
        /// Start of the out-of-order event.
        start: NaiveDateTime,
    },

    /// A user or event record collection failed to parse.
    #[error("record parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
