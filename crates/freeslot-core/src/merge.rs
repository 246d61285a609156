//! Busy-interval merging.
//!
//! Folds a chronologically ordered event sequence into per-day disjoint busy
//! chunks with a single left-to-right sweep. The open chunk only ever extends
//! forward, and the overlap test reuses the open chunk's own bounds as the
//! comparison range — both are correct only because the input is sorted
//! ascending by start time, which is why the sweep checks that ordering and
//! fails fast on disorder instead of re-sorting.

use crate::error::{Error, Result};
use crate::model::{BusyChunk, BusyTimeline, DayKey, Event, Horizon};

/// Sweep accumulator: the day being filled and the chunk currently open.
#[derive(Debug, Clone, Copy)]
struct SweepState {
    day: DayKey,
    chunk: BusyChunk,
}

impl SweepState {
    fn open(event: &Event) -> Self {
        SweepState {
            day: event.day(),
            chunk: BusyChunk {
                start: event.start,
                end: event.end,
            },
        }
    }

    /// Exact-duplicate record: same span as the open chunk, same day.
    fn is_duplicate(&self, event: &Event) -> bool {
        event.start == self.chunk.start && event.end == self.chunk.end && event.day() == self.day
    }

    /// Overlap against the open chunk's bounds. Touching counts as overlap,
    /// so back-to-back events merge into one chunk.
    fn overlaps(&self, event: &Event) -> bool {
        event.start <= self.chunk.end && event.end >= self.chunk.start
    }
}

/// Merge sorted events into per-day busy chunks over the given horizon.
///
/// Every horizon day is seeded with an empty chunk list up front, so days
/// without events still appear in the result. Chunks flushed to a day outside
/// the horizon are dropped. Day transitions always flush the open chunk —
/// days never merge across, whatever the raw timestamps say.
///
/// # Errors
/// Returns [`Error::PreconditionViolation`] when an event starts before its
/// predecessor; the sweep does not re-sort.
pub fn merge_busy(events: &[Event], horizon: &Horizon) -> Result<BusyTimeline> {
    let mut timeline: BusyTimeline = horizon
        .days()
        .iter()
        .map(|&day| (day, Vec::new()))
        .collect();

    let mut state: Option<SweepState> = None;
    let mut previous_start = None;

    for (position, event) in events.iter().enumerate() {
        if let Some(previous) = previous_start {
            if event.start < previous {
                return Err(Error::PreconditionViolation {
                    position,
                    previous,
                    start: event.start,
                });
            }
        }
        previous_start = Some(event.start);

        state = Some(match state {
            None => SweepState::open(event),
            Some(current) if current.is_duplicate(event) => current,
            Some(current) if event.day() != current.day => {
                flush(&mut timeline, current);
                SweepState::open(event)
            }
            Some(current) if current.overlaps(event) => {
                // chunk.start never moves backward: input is start-sorted.
                let mut extended = current;
                extended.chunk.end = extended.chunk.end.max(event.end);
                extended
            }
            Some(current) => {
                flush(&mut timeline, current);
                SweepState::open(event)
            }
        });
    }

    if let Some(current) = state {
        flush(&mut timeline, current);
    }

    Ok(timeline)
}

/// Push the open chunk into its day's bucket. Days outside the horizon have
/// no bucket; their chunks are dropped.
fn flush(timeline: &mut BusyTimeline, state: SweepState) {
    if let Some(bucket) = timeline.get_mut(&state.day) {
        bucket.push(state.chunk);
    }
}
