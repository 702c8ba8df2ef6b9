//! Clock time and day extraction.
//!
//! # Responsibility
//! - Resolve an optional clock time and a day reference from an utterance.
//! - Extract appointment durations and strip temporal phrases for titles.
//!
//! # Invariants
//! - Time and day passes are independent scans of the same input.
//! - Within each pass the first matching pattern wins.
//! - Minutes default to `00`; the designator is rendered upper-case.

use crate::model::time_spec::{ClockTime, DayRef, Meridiem, TimeSpec};
use chrono::{Duration, Weekday};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const WEEKDAY_ALTERNATION: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

/// Appointment length used when no `for N minutes` phrase is present.
pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

/// Ordered from most to least specific. Groups: hour, optional minutes,
/// designator letter.
static TIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bat\s+(\d{1,2}):(\d{2})\s*([ap])\.?m\b",
        r"(?i)\bat\s+(\d{1,2})()\s*([ap])\.?m\b",
        r"(?i)\b(\d{1,2}):(\d{2})\s*([ap])\.?m\b",
        r"(?i)\b(\d{1,2})()\s*([ap])\.?m\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid time regex"))
    .collect()
});

static NEXT_WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bnext\s+({WEEKDAY_ALTERNATION})\b"))
        .expect("valid next weekday regex")
});
static WEEKDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({WEEKDAY_ALTERNATION})\b")).expect("valid weekday regex")
});
static TOMORROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btomorrow\b").expect("valid tomorrow regex"));
static TODAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btoday\b").expect("valid today regex"));

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfor\s+(\d{1,3}|an?|one)\s*(minutes?|mins?|hours?|hrs?)\b")
        .expect("valid duration regex")
});

static STRIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:at\s+)?\d{1,2}(?::\d{2})?\s*[ap]\.?m\b\.?")
            .expect("valid strip time regex"),
        Regex::new(&format!(
            r"(?i)\b(?:on\s+)?(?:next\s+)?(?:{WEEKDAY_ALTERNATION})\b"
        ))
        .expect("valid strip weekday regex"),
        Regex::new(r"(?i)\b(?:tomorrow|today)\b").expect("valid strip day regex"),
        Regex::clone(&DURATION_RE),
    ]
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Resolves clock time and day reference from one utterance.
///
/// Never fails: a missing time is `None`, a missing day is `Today`.
pub fn resolve(utterance: &str) -> TimeSpec {
    let clock_time = resolve_clock_time(utterance);
    let day = resolve_day(utterance);
    debug!(
        "event=datetime_resolved module=parser has_time={} has_day={}",
        clock_time.is_some(),
        day.is_some()
    );
    TimeSpec {
        clock_time,
        day: day.unwrap_or_default(),
        day_explicit: day.is_some(),
    }
}

fn resolve_clock_time(utterance: &str) -> Option<ClockTime> {
    TIME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(utterance))
        .and_then(|caps| clock_time_from(&caps))
}

fn clock_time_from(caps: &Captures<'_>) -> Option<ClockTime> {
    let hour = caps.get(1)?.as_str().parse::<u8>().ok()?;
    let minute = match caps.get(2).map(|m| m.as_str()) {
        Some(value) if !value.is_empty() => value.parse::<u8>().ok()?,
        _ => 0,
    };
    let meridiem = match caps.get(3)?.as_str() {
        "a" | "A" => Meridiem::Am,
        _ => Meridiem::Pm,
    };
    Some(ClockTime {
        hour,
        minute,
        meridiem,
    })
}

fn resolve_day(utterance: &str) -> Option<DayRef> {
    if let Some(weekday) = capture_weekday(&NEXT_WEEKDAY_RE, utterance) {
        return Some(DayRef::Weekday {
            weekday,
            next: true,
        });
    }
    if let Some(weekday) = capture_weekday(&WEEKDAY_RE, utterance) {
        return Some(DayRef::Weekday {
            weekday,
            next: false,
        });
    }
    if TOMORROW_RE.is_match(utterance) {
        return Some(DayRef::Tomorrow);
    }
    if TODAY_RE.is_match(utterance) {
        return Some(DayRef::Today);
    }
    None
}

fn capture_weekday(pattern: &Regex, utterance: &str) -> Option<Weekday> {
    let name = pattern.captures(utterance)?.get(1)?.as_str().to_lowercase();
    name.parse::<Weekday>().ok()
}

/// Extracts an explicit appointment length such as `for 45 minutes`.
pub fn duration(utterance: &str) -> Option<Duration> {
    let caps = DURATION_RE.captures(utterance)?;
    let amount = match caps.get(1)?.as_str().to_lowercase().as_str() {
        "a" | "an" | "one" => 1,
        digits => digits.parse::<i64>().ok()?,
    };
    if amount == 0 {
        return None;
    }
    let unit = caps.get(2)?.as_str().to_lowercase();
    if unit.starts_with('h') {
        Some(Duration::hours(amount))
    } else {
        Some(Duration::minutes(amount))
    }
}

/// Removes every time, day and duration phrase and normalizes whitespace.
///
/// Leftover edge punctuation is trimmed; an empty string means nothing but
/// temporal phrases was spoken.
pub fn strip_temporal_phrases(utterance: &str) -> String {
    let stripped = STRIP_PATTERNS
        .iter()
        .fold(utterance.to_string(), |text, pattern| {
            pattern.replace_all(&text, " ").into_owned()
        });
    WHITESPACE_RE
        .replace_all(&stripped, " ")
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '.' | '!' | '?'))
        .to_string()
}
