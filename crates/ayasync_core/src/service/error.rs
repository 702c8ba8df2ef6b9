//! User-visible failure taxonomy for voice flows.

use crate::platform::calendar::CalendarError;
use crate::platform::speech::CaptureError;
use crate::platform::Permission;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure surfaced to the user as one notification.
///
/// Unrecognized commands are not errors; they produce a guidance reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// Microphone or calendar access was refused.
    PermissionDenied(Permission),
    /// Transcript was empty; `hint` shows an accepted phrasing.
    EmptyUtterance { hint: &'static str },
    /// No date or time could be read from the utterance.
    Unparseable(String),
    NoWritableCalendar,
    Capture(CaptureError),
    Calendar(CalendarError),
}

impl VoiceError {
    /// Stable code for logs and FFI envelopes. Never includes user text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "permission_denied",
            Self::EmptyUtterance { .. } => "empty_utterance",
            Self::Unparseable(_) => "unparseable",
            Self::NoWritableCalendar => "no_writable_calendar",
            Self::Capture(_) => "capture_failed",
            Self::Calendar(_) => "calendar_failed",
        }
    }
}

impl Display for VoiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied(permission) => {
                write!(f, "Permission denied: {permission} permission is required")
            }
            Self::EmptyUtterance { hint } => write!(f, "Please say something like \"{hint}\""),
            Self::Unparseable(text) => write!(f, "Couldn't parse date/time from: {text}"),
            Self::NoWritableCalendar => write!(f, "No writable calendar found"),
            Self::Capture(err) => write!(f, "{err}"),
            Self::Calendar(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VoiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Capture(err) => Some(err),
            Self::Calendar(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CaptureError> for VoiceError {
    fn from(value: CaptureError) -> Self {
        Self::Capture(value)
    }
}

impl From<CalendarError> for VoiceError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}
