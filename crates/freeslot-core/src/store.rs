//! In-memory repository over the loaded user and event records.
//!
//! The persistence layer of the surrounding system reduces, for the core's
//! purposes, to one read: "filter events by a user set, return them sorted
//! ascending by start time". Everything downstream depends on that sort
//! order (see [`crate::merge`]).

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{Event, User};

/// Indexed, read-only collection of users and their events.
#[derive(Debug, Clone)]
pub struct EventStore {
    users: Vec<User>,
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store from already-parsed records.
    ///
    /// # Errors
    /// Returns [`Error::DataUnavailable`] when the event collection is empty:
    /// an absent data set is a load-boundary failure, not a valid schedule.
    pub fn new(users: Vec<User>, events: Vec<Event>) -> Result<Self> {
        if events.is_empty() {
            return Err(Error::DataUnavailable);
        }
        Ok(EventStore { users, events })
    }

    /// Parse the users and events JSON arrays and build a store.
    ///
    /// # Errors
    /// Returns [`Error::Json`] for malformed records and
    /// [`Error::DataUnavailable`] for an empty event collection.
    pub fn from_json(users_json: &str, events_json: &str) -> Result<Self> {
        let users: Vec<User> = serde_json::from_str(users_json)?;
        let events: Vec<Event> = serde_json::from_str(events_json)?;
        Self::new(users, events)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Events belonging to the selected users, sorted ascending by
    /// `(start, end)`.
    ///
    /// `None` selects every user. Names matching no user simply contribute
    /// nothing — a selection with no events is a valid (fully free) schedule,
    /// not an error.
    pub fn events_for(&self, selection: Option<&[String]>) -> Vec<Event> {
        let ids: Option<HashSet<u64>> = selection.map(|names| {
            let names: HashSet<&str> = names.iter().map(String::as_str).collect();
            self.users
                .iter()
                .filter(|user| names.contains(user.name.as_str()))
                .map(|user| user.id)
                .collect()
        });

        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|event| ids.as_ref().is_none_or(|ids| ids.contains(&event.user_id)))
            .cloned()
            .collect();
        events.sort_by_key(|event| (event.start, event.end));
        events
    }
}
