//! # freeslot-core
//!
//! Free-time window computation over multi-user event schedules.
//!
//! Given the scheduled events of a set of users and a fixed daily
//! availability window, the pipeline merges overlapping events into per-day
//! busy chunks, then inverts each day's chunks against the window to produce
//! the free intervals remaining over a fixed multi-day horizon.
//!
//! ## Modules
//!
//! - [`store`] — in-memory user/event repository with filtered, sorted reads
//! - [`merge`] — ordered events → per-day disjoint busy chunks
//! - [`freebusy`] — busy chunks + daily window → free intervals
//! - [`report`] — free intervals → the rendered day-block report
//! - [`model`] — records, chunks, windows, the horizon
//! - [`error`] — error types

pub mod error;
pub mod freebusy;
pub mod merge;
pub mod model;
pub mod report;
pub mod store;

pub use error::{Error, Result};
pub use freebusy::{free_for_day, free_intervals};
pub use merge::merge_busy;
pub use model::{
    BusyChunk, BusyTimeline, DailyWindow, DayKey, Event, FreeInterval, Horizon, User,
};
pub use report::render;
pub use store::EventStore;
