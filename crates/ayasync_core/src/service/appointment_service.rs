//! Spoken appointment to device calendar flow.
//!
//! # Responsibility
//! - Turn one utterance into a concrete start/end window and title.
//! - Write the appointment into the first writable device calendar.
//!
//! # Invariants
//! - Nothing is written when the utterance carries no date or time.
//! - Calendar permission is checked before calendars are listed.
//! - Missing duration falls back to 30 minutes; missing title to
//!   `Appointment`.

use crate::parser::datetime::{
    duration, resolve, strip_temporal_phrases, DEFAULT_APPOINTMENT_MINUTES,
};
use crate::platform::calendar::{CalendarProvider, NewCalendarEvent};
use crate::platform::Permission;
use crate::service::error::VoiceError;
use chrono::{Duration, Local, NaiveDateTime};
use log::{info, warn};

/// Example phrasing shown when nothing was heard.
pub const APPOINTMENT_HINT: &str = "Appointment at 2pm Thursday for 30 minutes";

const FALLBACK_TITLE: &str = "Appointment";

/// Appointment parsed from speech, before it is written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub notes: String,
}

/// Appointment written to the device calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAppointment {
    pub event_id: String,
    pub calendar_id: String,
    pub draft: AppointmentDraft,
    /// Confirmation to show and speak.
    pub message: String,
}

/// Parses an utterance into an appointment window.
///
/// # Errors
/// - `EmptyUtterance` for a blank transcript.
/// - `Unparseable` when no time or day phrase is present, or the spoken
///   time is not a valid time of day.
pub fn draft_appointment(
    utterance: &str,
    now: NaiveDateTime,
) -> Result<AppointmentDraft, VoiceError> {
    let spoken = utterance.trim();
    if spoken.is_empty() {
        return Err(VoiceError::EmptyUtterance {
            hint: APPOINTMENT_HINT,
        });
    }

    let spec = resolve(spoken);
    if spec.is_empty() {
        return Err(VoiceError::Unparseable(spoken.to_string()));
    }
    let start = spec
        .start_at(now)
        .ok_or_else(|| VoiceError::Unparseable(spoken.to_string()))?;
    let length =
        duration(spoken).unwrap_or_else(|| Duration::minutes(DEFAULT_APPOINTMENT_MINUTES));

    let stripped = strip_temporal_phrases(spoken);
    let title = if stripped.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        stripped
    };

    Ok(AppointmentDraft {
        title,
        start,
        end: start + length,
        notes: format!("Created via voice: \"{spoken}\""),
    })
}

/// Calendar write service over an injected device calendar.
pub struct AppointmentService<C: CalendarProvider> {
    calendar: C,
}

impl<C: CalendarProvider> AppointmentService<C> {
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// Saves one spoken appointment using the local wall clock.
    pub fn save(&mut self, utterance: &str) -> Result<SavedAppointment, VoiceError> {
        self.save_at(utterance, Local::now().naive_local())
    }

    /// Saves one spoken appointment relative to `now`.
    ///
    /// # Errors
    /// - Parse errors from [`draft_appointment`].
    /// - `PermissionDenied(Calendar)` when access is refused.
    /// - `NoWritableCalendar` when every calendar is read-only.
    /// - `Calendar` for backend failures.
    pub fn save_at(
        &mut self,
        utterance: &str,
        now: NaiveDateTime,
    ) -> Result<SavedAppointment, VoiceError> {
        let result = self.save_inner(utterance, now);
        match &result {
            Ok(_) => info!("event=appointment_saved module=service status=ok"),
            Err(err) => warn!(
                "event=appointment_saved module=service status=error code={}",
                err.code()
            ),
        }
        result
    }

    fn save_inner(
        &mut self,
        utterance: &str,
        now: NaiveDateTime,
    ) -> Result<SavedAppointment, VoiceError> {
        let draft = draft_appointment(utterance, now)?;

        if !self.calendar.request_permission() {
            return Err(VoiceError::PermissionDenied(Permission::Calendar));
        }

        let calendar_id = self
            .calendar
            .list_calendars()?
            .into_iter()
            .find(|calendar| calendar.allows_modifications)
            .map(|calendar| calendar.id)
            .ok_or(VoiceError::NoWritableCalendar)?;

        let event_id = self.calendar.create_event(
            calendar_id.as_str(),
            &NewCalendarEvent {
                title: draft.title.clone(),
                start: draft.start,
                end: draft.end,
                notes: draft.notes.clone(),
            },
        )?;

        let message = format!(
            "Appointment saved! {}, {}",
            draft.title,
            draft.start.format("%a %b %-d at %-I:%M %p")
        );
        Ok(SavedAppointment {
            event_id,
            calendar_id,
            draft,
            message,
        })
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }
}
