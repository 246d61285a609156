//! Report rendering.
//!
//! Formats free intervals as the bracketed per-day report: a separator line,
//! one block of `<date> <start> - <end>` lines per horizon day with a blank
//! line after each block (empty days contribute just the blank line), and a
//! closing separator. Times use 24-hour `%k:%M`, so single-digit hours come
//! out space-padded.

use std::fmt::Write;

use crate::model::{FreeInterval, Horizon};

const SEPARATOR: &str = "------------------------";

/// Render the free intervals for the whole horizon as the final report.
pub fn render(free: &[FreeInterval], horizon: &Horizon) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push_str("\n\n");

    for &day in horizon.days() {
        for interval in free.iter().filter(|interval| interval.day == day) {
            let _ = writeln!(
                out,
                "{} {} - {}",
                day.format("%Y-%m-%d"),
                interval.start.format("%k:%M"),
                interval.end.format("%k:%M"),
            );
        }
        out.push('\n');
    }

    out.push_str(SEPARATOR);
    out.push('\n');
    out
}
