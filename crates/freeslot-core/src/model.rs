//! Records, chunks, windows, and the reporting horizon.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

/// The calendar date used to bucket events and busy chunks.
pub type DayKey = NaiveDate;

/// Per-day busy chunks, keyed by day in calendar order.
pub type BusyTimeline = BTreeMap<DayKey, Vec<BusyChunk>>;

/// A calendar user, as loaded from the users collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// A scheduled event owned by a single user.
///
/// `start < end` is assumed, not validated: a malformed record propagates
/// through the pipeline as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "start_time", deserialize_with = "flexible_datetime")]
    pub start: NaiveDateTime,
    #[serde(rename = "end_time", deserialize_with = "flexible_datetime")]
    pub end: NaiveDateTime,
}

impl Event {
    /// The calendar day this event is bucketed under, taken from its start.
    pub fn day(&self) -> DayKey {
        self.start.date()
    }
}

/// A merged span of busy time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyChunk {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A maximal gap in the daily window during which no selected user is busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeInterval {
    pub day: DayKey,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// The fixed `[open, close)` availability window applied identically to every
/// horizon day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyWindow {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

/// The ordered set of calendar days a report covers.
///
/// Supplied by the caller as configuration; the core never bakes in dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horizon {
    days: Vec<DayKey>,
}

impl Horizon {
    pub fn new(days: Vec<DayKey>) -> Self {
        Horizon { days }
    }

    /// A horizon of `count` consecutive days starting at `first`.
    pub fn consecutive(first: DayKey, count: u32) -> Self {
        let days = (0..count)
            .map(|i| first + Days::new(u64::from(i)))
            .collect();
        Horizon { days }
    }

    pub fn days(&self) -> &[DayKey] {
        &self.days
    }
}

/// Accepts both `2021-07-05T13:30:00` and `2021-07-05 13:30:00` spellings.
fn flexible_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}
