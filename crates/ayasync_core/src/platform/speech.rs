//! Speech capture and speech output contracts.

use crate::config::SpeechParams;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a listening session.
///
/// Completion and failure are distinct outcomes: a successful session
/// always yields a transcript, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Recognizer produced no result before the session ended.
    NoMatch,
    /// Recognizer reported an error with a platform message.
    Recognizer(String),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => write!(f, "no speech was recognized"),
            Self::Recognizer(message) if message.trim().is_empty() => {
                write!(f, "speech error: unknown error")
            }
            Self::Recognizer(message) => write!(f, "speech error: {message}"),
        }
    }
}

impl Error for CaptureError {}

/// Device speech-to-text capability.
pub trait SpeechCapture {
    /// Requests microphone access; returns whether it was granted.
    fn request_permission(&mut self) -> bool;

    /// Runs one listening session and returns the terminal transcript.
    ///
    /// Interim results are not consumed.
    fn capture(&mut self, locale: &str) -> Result<String, CaptureError>;
}

/// Device text-to-speech capability.
///
/// Fire-and-forget: playback completion is not reported back to core.
pub trait SpeechOutput {
    fn speak(&self, message: &str, params: &SpeechParams);
}
