//! Core voice command logic for AyaSync.
//! This crate is the single source of truth for interpretation invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod platform;
pub mod service;

pub use config::{SettingsError, SpeechParams, VoiceSettings};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{EntryId, Event, Task};
pub use model::intent::{Intent, Shortcut};
pub use model::time_spec::{ClockTime, DayRef, Meridiem, TimeSpec};
pub use parser::datetime::resolve;
pub use parser::intent::classify;
pub use platform::calendar::{CalendarError, CalendarInfo, CalendarProvider, NewCalendarEvent};
pub use platform::speech::{CaptureError, SpeechCapture, SpeechOutput};
pub use platform::Permission;
pub use service::appointment_service::{
    draft_appointment, AppointmentDraft, AppointmentService, SavedAppointment,
};
pub use service::assistant_service::{AssistantService, Reply};
pub use service::error::VoiceError;
pub use service::voice_session::VoiceSession;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
