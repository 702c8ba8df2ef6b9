//! Device calendar contract.

use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Calendar summary returned by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInfo {
    pub id: String,
    pub title: String,
    /// Whether events may be created in this calendar.
    pub allows_modifications: bool,
}

/// Event write request for the device calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: String,
}

/// Calendar backend failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarError {
    pub message: String,
}

impl CalendarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "calendar error: {}", self.message)
    }
}

impl Error for CalendarError {}

/// Device calendar read/write capability.
pub trait CalendarProvider {
    /// Requests calendar access; returns whether it was granted.
    fn request_permission(&mut self) -> bool;

    /// Lists event calendars visible to the app.
    fn list_calendars(&self) -> Result<Vec<CalendarInfo>, CalendarError>;

    /// Creates one event and returns the platform event ID.
    fn create_event(
        &mut self,
        calendar_id: &str,
        event: &NewCalendarEvent,
    ) -> Result<String, CalendarError>;
}
