//! Spoken response synthesis.
//!
//! # Responsibility
//! - Combine classified payloads with resolved date/time into final text.
//! - Render confirmations, read-outs and the daily overview.
//!
//! # Invariants
//! - Every function here is pure over its inputs.
//! - Schedule read-outs only include events dated `Today`.
//! - Task read-outs only include pending tasks.

use crate::model::entry::{Event, Task};
use crate::model::time_spec::TimeSpec;
use once_cell::sync::Lazy;
use regex::Regex;

/// Guidance returned for unrecognized commands.
pub const FALLBACK_MESSAGE: &str = "Sorry, I didn't understand that. Try saying \
\"Add task to buy groceries\", \"Add meeting tomorrow at 2 PM\" or \"What's my schedule today?\"";

/// Example phrasing shown when nothing was heard.
pub const COMMAND_HINT: &str = "Add task to call Sarah tomorrow at 3 PM";

pub const FOCUS_MODE_MESSAGE: &str =
    "Focus mode activated. I'll keep things quiet so you can concentrate.";

const CAUGHT_UP_MESSAGE: &str = "You have no pending tasks. You're all caught up!";
const NO_EVENTS_MESSAGE: &str = "You have no events scheduled for today.";
const FALLBACK_EVENT_TITLE: &str = "Event";

static TITLE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" (?:at|on) ").expect("valid title split regex"));

/// Appends the resolved date/time suffix to a task payload.
///
/// - day and time, day not `Today`: ` (<Day> at <Time>)`
/// - time only (or day is `Today`): ` (at <Time>)`
/// - day only, not `Today`: ` (<Day>)`
pub fn task_text(raw_text: &str, spec: &TimeSpec) -> String {
    let day = spec.day_label();
    let show_day = !spec.day.is_today();
    match (spec.clock_label(), show_day) {
        (Some(time), true) => format!("{raw_text} ({day} at {time})"),
        (Some(time), false) => format!("{raw_text} (at {time})"),
        (None, true) => format!("{raw_text} ({day})"),
        (None, false) => raw_text.to_string(),
    }
}

/// Event title: text before the first lower-case ` at ` or ` on `, trimmed.
pub fn event_title(raw_text: &str) -> String {
    let head = TITLE_SPLIT_RE
        .split(raw_text)
        .next()
        .unwrap_or(raw_text)
        .trim();
    if head.is_empty() {
        FALLBACK_EVENT_TITLE.to_string()
    } else {
        head.to_string()
    }
}

pub fn task_added(task: &Task) -> String {
    format!("Task added: {}", task.text)
}

pub fn task_completed(task: &Task) -> String {
    format!("Task completed: {}", task.text)
}

/// Reply when a completion command matches no pending task.
pub fn task_not_found(target: Option<&str>) -> String {
    match target {
        Some(target) => format!("I couldn't find a pending task matching \"{target}\"."),
        None => CAUGHT_UP_MESSAGE.to_string(),
    }
}

pub fn event_scheduled(event: &Event) -> String {
    format!(
        "Event scheduled: {} on {} at {}",
        event.title, event.date, event.time
    )
}

/// Reads out pending tasks in insertion order.
pub fn task_readout(tasks: &[Task]) -> String {
    let pending = tasks
        .iter()
        .filter(|task| task.is_pending())
        .map(|task| task.text.as_str())
        .collect::<Vec<_>>();
    if pending.is_empty() {
        return CAUGHT_UP_MESSAGE.to_string();
    }
    format!(
        "You have {}: {}.",
        count_noun(pending.len(), "pending task"),
        pending.join(", ")
    )
}

/// Reads out today's events in insertion order.
pub fn schedule_readout(events: &[Event]) -> String {
    todays_summary(events)
}

/// Greeting, today's events and pending task count.
pub fn daily_overview(hour: u32, tasks: &[Task], events: &[Event]) -> String {
    let pending = tasks.iter().filter(|task| task.is_pending()).count();
    let task_summary = if pending == 0 {
        CAUGHT_UP_MESSAGE.to_string()
    } else {
        format!("You have {}.", count_noun(pending, "pending task"))
    };

    format!(
        "{}! Here's your daily overview. {} {}",
        salutation(hour),
        todays_summary(events),
        task_summary
    )
}

/// Time-of-day greeting for a 0-23 hour.
pub fn salutation(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

fn todays_summary(events: &[Event]) -> String {
    let today = events
        .iter()
        .filter(|event| event.is_today())
        .map(|event| format!("{} at {}", event.title, event.time))
        .collect::<Vec<_>>();
    if today.is_empty() {
        return NO_EVENTS_MESSAGE.to_string();
    }
    format!(
        "You have {} today: {}.",
        count_noun(today.len(), "event"),
        today.join(", ")
    )
}

fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
