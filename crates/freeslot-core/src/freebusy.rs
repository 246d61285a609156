//! Free-interval derivation.
//!
//! Inverts a day's busy chunks against the fixed `[open, close)` window by
//! walking a cursor from `open`, emitting the gap before each chunk and the
//! trailing gap before `close`.

use crate::model::{BusyChunk, BusyTimeline, DailyWindow, DayKey, FreeInterval, Horizon};

/// Free intervals for every horizon day, in day order.
///
/// Horizon days missing from the timeline are treated as chunk-free and come
/// out fully free.
pub fn free_intervals(
    timeline: &BusyTimeline,
    horizon: &Horizon,
    window: DailyWindow,
) -> Vec<FreeInterval> {
    horizon
        .days()
        .iter()
        .flat_map(|&day| {
            let chunks = timeline.get(&day).map(Vec::as_slice).unwrap_or(&[]);
            free_for_day(day, chunks, window)
        })
        .collect()
}

/// Free intervals for one day's ordered, disjoint busy chunks.
///
/// Chunks are assumed to lie inside `[open, close)`; nothing is clamped. A
/// chunk starting before `open` or ending after `close` passes straight
/// through and can yield an inverted range — callers needing strict output
/// must validate events before merging. The boundary comparisons are
/// equality tests, not orderings, to match that pass-through behavior.
pub fn free_for_day(day: DayKey, chunks: &[BusyChunk], window: DailyWindow) -> Vec<FreeInterval> {
    let mut free = Vec::new();
    let mut cursor = window.open;

    for chunk in chunks {
        let gap_end = chunk.start.time();
        // A chunk starting exactly at the cursor leaves no gap to emit.
        if cursor != gap_end {
            free.push(FreeInterval {
                day,
                start: cursor,
                end: gap_end,
            });
        }
        cursor = chunk.end.time();
    }

    if cursor != window.close {
        free.push(FreeInterval {
            day,
            start: cursor,
            end: window.close,
        });
    }

    free
}
