//! `freeslot` CLI — report the free-time windows shared by selected users.
//!
//! ## Usage
//!
//! ```sh
//! # All users, default window (13:00-21:00) and horizon (2021-07-05, 3 days)
//! freeslot
//!
//! # Only consider Alice and Bob
//! freeslot Alice,Bob
//!
//! # Custom data files, window, and horizon
//! freeslot --users-file data/users.json --events-file data/events.json \
//!     --open 09:00 --close 17:00 --from 2024-03-04 --days 5
//! ```

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use freeslot_core::{free_intervals, merge_busy, render, DailyWindow, EventStore, Horizon};

#[derive(Parser)]
#[command(
    name = "freeslot",
    version,
    about = "Report free-time windows shared by the selected users"
)]
struct Cli {
    /// Comma-separated user names to consider (all users when omitted)
    users: Option<String>,

    /// Path to the users JSON file
    #[arg(long, default_value = "users.json")]
    users_file: String,

    /// Path to the events JSON file
    #[arg(long, default_value = "events.json")]
    events_file: String,

    /// Daily window open time (24-hour HH:MM)
    #[arg(long, default_value = "13:00")]
    open: String,

    /// Daily window close time (24-hour HH:MM)
    #[arg(long, default_value = "21:00")]
    close: String,

    /// First day of the reporting horizon (YYYY-MM-DD)
    #[arg(long, default_value = "2021-07-05")]
    from: String,

    /// Number of consecutive days in the horizon
    #[arg(long, default_value_t = 3)]
    days: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let window = DailyWindow {
        open: parse_time(&cli.open)?,
        close: parse_time(&cli.close)?,
    };
    let first = NaiveDate::parse_from_str(&cli.from, "%Y-%m-%d")
        .with_context(|| format!("Invalid --from date (expected YYYY-MM-DD): {}", cli.from))?;
    let horizon = Horizon::consecutive(first, cli.days);

    let users_json = std::fs::read_to_string(&cli.users_file)
        .with_context(|| format!("Failed to read file: {}", cli.users_file))?;
    let events_json = std::fs::read_to_string(&cli.events_file)
        .with_context(|| format!("Failed to read file: {}", cli.events_file))?;

    let store = EventStore::from_json(&users_json, &events_json)
        .context("Failed to load user/event records")?;

    let selection = cli.users.as_deref().map(split_names);
    let events = store.events_for(selection.as_deref());

    let timeline = merge_busy(&events, &horizon).context("Failed to merge busy intervals")?;
    let free = free_intervals(&timeline, &horizon, window);
    print!("{}", render(&free, &horizon));

    Ok(())
}

/// `"Alice, Bob"` → `["Alice", "Bob"]`; empty segments are dropped.
fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .with_context(|| format!("Invalid time (expected 24-hour HH:MM): {raw}"))
}
