//! Intent classification over raw utterances.
//!
//! # Responsibility
//! - Map one utterance to exactly one `Intent`.
//! - Capture the task/event payload that follows a command phrase.
//!
//! # Invariants
//! - Cascade order is shortcuts, completion patterns, task patterns, event
//!   patterns, keywords.
//! - Captured payloads are trimmed and never empty.
//! - Unmatched input yields `Intent::Unrecognized`, never an error.

use crate::model::intent::{Intent, Shortcut};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortcut phrases in match order, compared against lowercased input.
const SHORTCUT_PHRASES: &[(&str, Shortcut)] = &[
    ("start focus mode", Shortcut::FocusMode),
    ("show today's tasks", Shortcut::TodaysTasks),
    ("read my schedule", Shortcut::ReadSchedule),
    ("daily overview", Shortcut::DailyOverview),
];

const SCHEDULE_KEYWORDS: &[&str] = &["schedule", "calendar"];
const TASK_KEYWORDS: &[&str] = &["tasks", "todo"];

/// Anchored at the start so `add task to finish X` stays an add-task.
static COMPLETE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)^\s*(?:please\s+)?mark\s+(.+?)\s+as\s+(?:complete|completed|done|finished)\b",
        r"(?i)^\s*(?:please\s+)?(?:complete|finish)\s+(.+?)[.!]?\s*$",
    ])
});

/// Leading `the task`, `my task:` and similar around a completion target.
static TASK_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:the|my|a)\s+)?(?:task\b[\s:,]*)?")
        .expect("valid task reference regex")
});

static TASK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\badd\s+(?:a\s+)?(?:new\s+)?task(?:\s+to)?\s+(.+)",
        r"(?i)\bremind\s+me\s+to\s+(.+)",
        r"(?i)\bcreate\s+(?:a\s+)?(?:new\s+)?task(?:\s+to)?\s+(.+)",
        r"(?i)\bset\s+(?:a\s+)?reminder\s+(?:to|for)\s+(.+)",
        r"(?i)^\s*task\s*[:,]?\s+(.+)",
    ])
});

static EVENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:add|create)\s+(?:an?\s+)?(?:new\s+)?(?:meeting|appointment|event)\s+(.+)",
        r"(?i)\bschedule\s+(?:an?\s+)?(?:new\s+)?(?:meeting|appointment|event)\s+(.+)",
        r"(?i)\b(?:meeting|appointment|event)\s+((?:with|for)\s+.+)",
    ])
});

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid intent regex"))
        .collect()
}

/// Classifies one utterance.
///
/// Pure function of its input: repeated calls return identical results.
pub fn classify(utterance: &str) -> Intent {
    let intent = classify_inner(utterance);
    debug!(
        "event=intent_classified module=parser intent={}",
        intent.kind_label()
    );
    intent
}

fn classify_inner(utterance: &str) -> Intent {
    let normalized = normalize(utterance);

    if let Some(shortcut) = match_shortcut(&normalized) {
        return Intent::Shortcut(shortcut);
    }
    if let Some(target) = completion_target(utterance) {
        return Intent::CompleteTask(target);
    }
    if let Some(text) = first_capture(&TASK_PATTERNS, utterance) {
        return Intent::AddTask(text);
    }
    if let Some(text) = first_capture(&EVENT_PATTERNS, utterance) {
        return Intent::AddEvent(text);
    }

    if contains_any(&normalized, SCHEDULE_KEYWORDS) {
        Intent::ScheduleQuery
    } else if contains_any(&normalized, TASK_KEYWORDS) {
        Intent::TaskQuery
    } else {
        Intent::Unrecognized
    }
}

/// Returns the first shortcut whose phrase appears in `normalized`.
pub fn match_shortcut(normalized: &str) -> Option<Shortcut> {
    SHORTCUT_PHRASES
        .iter()
        .find(|(phrase, _)| normalized.contains(phrase))
        .map(|(_, shortcut)| *shortcut)
}

/// `Some(None)` for a completion command without a usable task name.
fn completion_target(utterance: &str) -> Option<Option<String>> {
    let captured = COMPLETE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(utterance))
        .and_then(|caps| caps.get(1))?
        .as_str()
        .trim();
    let target = TASK_REFERENCE_RE.replace(captured, "");
    let target = target.trim();
    if target.is_empty() {
        Some(None)
    } else {
        Some(Some(target.to_string()))
    }
}

/// Lowercases and folds typographic apostrophes emitted by recognizers.
fn normalize(utterance: &str) -> String {
    utterance.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

fn first_capture(patterns: &[Regex], utterance: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(utterance)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
