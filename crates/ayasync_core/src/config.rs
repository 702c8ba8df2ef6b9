//! Voice feedback settings.
//!
//! # Responsibility
//! - Hold the user-facing toggles that shape recognition and speech output.
//! - Validate and normalize values supplied by the host.
//!
//! # Invariants
//! - `locale` is always stored as `ll` or `ll-RR` (e.g. `en-US`).
//! - Rate and pitch stay inside the ranges accepted by device engines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_LOCALE: &str = "en-US";
const MIN_SPEECH_RATE: f32 = 0.1;
const MAX_SPEECH_RATE: f32 = 2.0;
const MIN_SPEECH_PITCH: f32 = 0.5;
const MAX_SPEECH_PITCH: f32 = 2.0;

static LOCALE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{2}))?$").expect("valid locale regex")
});

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    EmptyLocale,
    InvalidLocale(String),
    RateOutOfRange(f32),
    PitchOutOfRange(f32),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLocale => write!(f, "locale must not be empty"),
            Self::InvalidLocale(value) => {
                write!(f, "unsupported locale `{value}`; expected forms like `en` or `en-US`")
            }
            Self::RateOutOfRange(value) => write!(
                f,
                "speech rate {value} is outside {MIN_SPEECH_RATE}..={MAX_SPEECH_RATE}"
            ),
            Self::PitchOutOfRange(value) => write!(
                f,
                "speech pitch {value} is outside {MIN_SPEECH_PITCH}..={MAX_SPEECH_PITCH}"
            ),
        }
    }
}

impl Error for SettingsError {}

/// Parameters handed to the speech-output capability.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechParams {
    pub rate: f32,
    pub pitch: f32,
    pub language: String,
}

/// User-configurable voice behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// Whether confirmations are spoken aloud.
    pub spoken_feedback: bool,
    /// Locale used for both recognition and synthesis.
    pub locale: String,
    pub speech_rate: f32,
    pub speech_pitch: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            spoken_feedback: true,
            locale: DEFAULT_LOCALE.to_string(),
            speech_rate: 1.0,
            speech_pitch: 1.0,
        }
    }
}

impl VoiceSettings {
    /// Builds settings from host-provided toggle and locale.
    pub fn new(spoken_feedback: bool, locale: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            spoken_feedback,
            locale: normalize_locale(locale)?,
            ..Self::default()
        })
    }

    /// Validates every field and canonicalizes `locale` in place.
    pub fn validate(&mut self) -> Result<(), SettingsError> {
        self.locale = normalize_locale(&self.locale)?;
        if !(MIN_SPEECH_RATE..=MAX_SPEECH_RATE).contains(&self.speech_rate) {
            return Err(SettingsError::RateOutOfRange(self.speech_rate));
        }
        if !(MIN_SPEECH_PITCH..=MAX_SPEECH_PITCH).contains(&self.speech_pitch) {
            return Err(SettingsError::PitchOutOfRange(self.speech_pitch));
        }
        Ok(())
    }

    pub fn speech_params(&self) -> SpeechParams {
        SpeechParams {
            rate: self.speech_rate,
            pitch: self.speech_pitch,
            language: self.locale.clone(),
        }
    }
}

/// Normalizes `en_us`, `EN-us` and similar to `en-US`.
pub fn normalize_locale(value: &str) -> Result<String, SettingsError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SettingsError::EmptyLocale);
    }
    let caps = LOCALE_RE
        .captures(trimmed)
        .ok_or_else(|| SettingsError::InvalidLocale(trimmed.to_string()))?;
    let language = caps
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    Ok(match caps.get(2) {
        Some(region) => format!("{language}-{}", region.as_str().to_ascii_uppercase()),
        None => language,
    })
}

#[cfg(test)]
mod tests {
    use super::{normalize_locale, SettingsError, VoiceSettings};

    #[test]
    fn normalize_locale_canonicalizes_case_and_separator() {
        assert_eq!(normalize_locale(" en_us ").expect("en_us"), "en-US");
        assert_eq!(normalize_locale("HI-in").expect("HI-in"), "hi-IN");
        assert_eq!(normalize_locale("fr").expect("fr"), "fr");
    }

    #[test]
    fn normalize_locale_rejects_garbage() {
        assert_eq!(normalize_locale("  "), Err(SettingsError::EmptyLocale));
        assert!(matches!(
            normalize_locale("english please"),
            Err(SettingsError::InvalidLocale(_))
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_rate() {
        let mut settings = VoiceSettings {
            speech_rate: 5.0,
            ..VoiceSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::RateOutOfRange(5.0))
        );
    }

    #[test]
    fn speech_params_follow_locale() {
        let settings = VoiceSettings::new(true, "es_es").expect("valid settings");
        let params = settings.speech_params();
        assert_eq!(params.language, "es-ES");
        assert_eq!(params.rate, 1.0);
    }
}
