//! Resolved date/time reference extracted from one utterance.
//!
//! # Responsibility
//! - Hold the optional clock time and the day reference found by the
//!   datetime parser.
//! - Render both as the user-facing labels used in confirmations.
//! - Ground a reference on a concrete local date-time for calendar writes.
//!
//! # Invariants
//! - `day` is `DayRef::Today` when no day phrase was found.
//! - `ClockTime` renders as `H:MM AM|PM`, minutes always two digits.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};
use std::fmt::{Display, Formatter};

/// Event time used when an utterance carries no clock time.
pub const DEFAULT_EVENT_TIME: ClockTime = ClockTime {
    hour: 9,
    minute: 0,
    meridiem: Meridiem::Am,
};

/// Day label used when an utterance carries no day phrase.
pub const TODAY_LABEL: &str = "Today";
/// Day label for `tomorrow`.
pub const TOMORROW_LABEL: &str = "Tomorrow";

/// AM/PM designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// 12-hour clock time as spoken, e.g. `3:00 PM`.
///
/// `hour` keeps the spoken value; it is not range-checked here. Conversion
/// to a real time of day happens in [`ClockTime::to_naive_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl ClockTime {
    /// Converts to a 24-hour time of day.
    ///
    /// Returns `None` when the spoken values do not form a valid 12-hour
    /// time (e.g. `at 7:75 pm`, `at 25 pm`, `at 0 am`).
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        if self.hour == 0 || self.hour > 12 {
            return None;
        }
        let base = u32::from(self.hour % 12);
        let hour = match self.meridiem {
            Meridiem::Am => base,
            Meridiem::Pm => base + 12,
        };
        NaiveTime::from_hms_opt(hour, u32::from(self.minute), 0)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{:02} {}",
            self.hour,
            self.minute,
            self.meridiem.as_str()
        )
    }
}

/// Relative or absolute day reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayRef {
    #[default]
    Today,
    Tomorrow,
    /// A named weekday. `next` is set for `next <weekday>` phrasing.
    Weekday { weekday: Weekday, next: bool },
}

impl DayRef {
    /// User-facing label: `Today`, `Tomorrow` or the capitalized weekday.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => TODAY_LABEL,
            Self::Tomorrow => TOMORROW_LABEL,
            Self::Weekday { weekday, .. } => weekday_label(weekday),
        }
    }

    pub fn is_today(self) -> bool {
        matches!(self, Self::Today)
    }

    /// Days from `from` until this reference.
    ///
    /// A bare weekday that names the current day resolves to today; `next`
    /// skips ahead a full week in that case.
    pub fn days_from(self, from: Weekday) -> i64 {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::Weekday { weekday, next } => {
                let ahead = (7 + i64::from(weekday.num_days_from_monday())
                    - i64::from(from.num_days_from_monday()))
                    % 7;
                if ahead == 0 && next {
                    7
                } else {
                    ahead
                }
            }
        }
    }
}

/// Result of datetime resolution for one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSpec {
    /// Absent when no recognizable time phrase was found.
    pub clock_time: Option<ClockTime>,
    /// Defaults to `Today`.
    pub day: DayRef,
    /// Whether `day` came from an explicit day phrase.
    pub day_explicit: bool,
}

impl TimeSpec {
    /// Rendered clock time, e.g. `Some("3:00 PM")`.
    pub fn clock_label(&self) -> Option<String> {
        self.clock_time.map(|time| time.to_string())
    }

    pub fn day_label(&self) -> &'static str {
        self.day.label()
    }

    /// Whether neither a time nor a day phrase was found.
    pub fn is_empty(&self) -> bool {
        self.clock_time.is_none() && !self.day_explicit
    }

    /// Grounds this reference on a concrete local start time.
    ///
    /// Missing clock time falls back to [`DEFAULT_EVENT_TIME`]. Returns `None`
    /// when the spoken clock time is not a valid time of day.
    ///
    /// A start at or before `now` rolls forward: one day when no day phrase
    /// was spoken, one week for a bare weekday naming today. An explicit
    /// `today` is kept as spoken.
    pub fn start_at(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let time = self
            .clock_time
            .unwrap_or(DEFAULT_EVENT_TIME)
            .to_naive_time()?;
        let date = now.date() + Duration::days(self.day.days_from(now.weekday()));
        let start = date.and_time(time);
        if start > now {
            return Some(start);
        }
        let roll_days = match self.day {
            DayRef::Today if !self.day_explicit => 1,
            DayRef::Weekday { next: false, .. } => 7,
            _ => 0,
        };
        Some(start + Duration::days(roll_days))
    }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockTime, DayRef, Meridiem, TimeSpec};
    use chrono::{NaiveDate, Weekday};

    fn pm(hour: u8, minute: u8) -> ClockTime {
        ClockTime {
            hour,
            minute,
            meridiem: Meridiem::Pm,
        }
    }

    #[test]
    fn clock_time_renders_two_digit_minutes() {
        assert_eq!(pm(3, 0).to_string(), "3:00 PM");
        assert_eq!(pm(11, 5).to_string(), "11:05 PM");
    }

    #[test]
    fn twelve_oclock_converts_to_noon_and_midnight() {
        let noon = pm(12, 0).to_naive_time().expect("valid noon");
        assert_eq!(noon.to_string(), "12:00:00");
        let midnight = ClockTime {
            hour: 12,
            minute: 0,
            meridiem: Meridiem::Am,
        }
        .to_naive_time()
        .expect("valid midnight");
        assert_eq!(midnight.to_string(), "00:00:00");
    }

    #[test]
    fn invalid_minutes_do_not_convert() {
        assert!(pm(7, 75).to_naive_time().is_none());
    }

    #[test]
    fn hours_outside_twelve_hour_clock_do_not_convert() {
        assert!(pm(25, 0).to_naive_time().is_none());
        assert!(pm(13, 0).to_naive_time().is_none());
        let zero = ClockTime {
            hour: 0,
            minute: 30,
            meridiem: Meridiem::Am,
        };
        assert!(zero.to_naive_time().is_none());
        assert_eq!(pm(25, 0).to_string(), "25:00 PM");
    }

    #[test]
    fn past_start_rolls_forward_unless_today_is_explicit() {
        // 2026-10-19 is a Monday.
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|date| date.and_hms_opt(15, 0, 0))
            .expect("valid timestamp");
        let at_two = |day, day_explicit| TimeSpec {
            clock_time: Some(pm(2, 0)),
            day,
            day_explicit,
        };

        let implicit = at_two(DayRef::Today, false).start_at(now).expect("start");
        assert_eq!(implicit.to_string(), "2026-10-20 14:00:00");

        let monday = DayRef::Weekday {
            weekday: Weekday::Mon,
            next: false,
        };
        let bare_weekday = at_two(monday, true).start_at(now).expect("start");
        assert_eq!(bare_weekday.to_string(), "2026-10-26 14:00:00");

        let explicit_today = at_two(DayRef::Today, true).start_at(now).expect("start");
        assert_eq!(explicit_today.to_string(), "2026-10-19 14:00:00");

        let later = TimeSpec {
            clock_time: Some(pm(4, 0)),
            ..TimeSpec::default()
        };
        assert_eq!(
            later.start_at(now).expect("start").to_string(),
            "2026-10-19 16:00:00"
        );
    }

    #[test]
    fn weekday_offsets_respect_next_phrasing() {
        let wednesday = DayRef::Weekday {
            weekday: Weekday::Wed,
            next: false,
        };
        let next_wednesday = DayRef::Weekday {
            weekday: Weekday::Wed,
            next: true,
        };
        assert_eq!(wednesday.days_from(Weekday::Mon), 2);
        assert_eq!(wednesday.days_from(Weekday::Wed), 0);
        assert_eq!(next_wednesday.days_from(Weekday::Wed), 7);
        assert_eq!(wednesday.days_from(Weekday::Fri), 5);
    }

    #[test]
    fn start_at_defaults_to_nine_am() {
        // 2026-10-19 is a Monday.
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|date| date.and_hms_opt(8, 0, 0))
            .expect("valid timestamp");
        let spec = TimeSpec {
            clock_time: None,
            day: DayRef::Tomorrow,
            day_explicit: true,
        };
        let start = spec.start_at(now).expect("start should resolve");
        assert_eq!(start.to_string(), "2026-10-20 09:00:00");
    }
}
