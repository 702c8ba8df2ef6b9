//! Task and event entries held by the assistant.
//!
//! # Responsibility
//! - Define the in-memory records created by voice commands.
//! - Provide lifecycle helpers for task completion.
//!
//! # Invariants
//! - `id` is a random v4 UUID, never reused within a process.
//! - New tasks always start with `completed == false`.
//! - Events always carry a rendered time and day label.

use crate::model::time_spec::{DEFAULT_EVENT_TIME, TODAY_LABEL};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for tasks and events.
pub type EntryId = Uuid;

/// To-do item created from an add-task command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    /// Final task text, including any resolved date/time suffix.
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with a generated ID.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }

    /// Flips completion state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Calendar-style entry created from an add-event command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntryId,
    pub title: String,
    /// Rendered clock time, e.g. `2:30 PM`.
    pub time: String,
    /// Day label, e.g. `Today`, `Tomorrow`, `Wednesday`.
    pub date: String,
}

impl Event {
    /// Creates an event with a generated ID.
    ///
    /// Missing `time` falls back to `9:00 AM`; missing `date` to `Today`.
    pub fn new(title: impl Into<String>, time: Option<String>, date: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            time: time.unwrap_or_else(|| DEFAULT_EVENT_TIME.to_string()),
            date: date.unwrap_or_else(|| TODAY_LABEL.to_string()),
        }
    }

    pub fn is_today(&self) -> bool {
        self.date == TODAY_LABEL
    }
}
