//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose voice command use cases to Dart via FRB.
//! - Own the process-wide assistant and settings behind one lock each.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls touching assistant state are serialized through one `Mutex`.
//! - Return values are UTF-8 strings with stable meaning.

use ayasync_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    resolve, AssistantService, Event, Task, VoiceSettings,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

static ASSISTANT: OnceLock<Mutex<AssistantService>> = OnceLock::new();
static SETTINGS: OnceLock<Mutex<VoiceSettings>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Reply envelope for one handled utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceReplyResponse {
    /// Whether the utterance produced a reply (unrecognized still counts).
    pub ok: bool,
    /// Intent tag, e.g. `add_task`, `complete_task` or `unrecognized`.
    pub intent: Option<String>,
    /// Message to display, and to speak when `speak` is set.
    pub message: String,
    /// Created task/event ID, if the command appended one.
    pub entry_id: Option<String>,
    /// Stable error code when `ok` is false.
    pub error_code: Option<String>,
    /// Mirrors the spoken-feedback setting at handling time.
    pub speak: bool,
}

/// Task row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Event row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    pub time: String,
    pub date: String,
}

/// Result of datetime resolution for preview chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeResponse {
    pub clock_time: Option<String>,
    pub day_label: String,
}

/// Generic action envelope for list mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    pub ok: bool,
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Runs one recognized utterance through the assistant pipeline.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; failures come back as `ok = false` with a code.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_handle(utterance: String) -> VoiceReplyResponse {
    let speak = lock(settings()).spoken_feedback;
    match lock(assistant()).handle(utterance.as_str()) {
        Ok(reply) => VoiceReplyResponse {
            ok: true,
            intent: Some(reply.intent.kind_label().to_string()),
            message: reply.message,
            entry_id: reply.created.map(|id| id.to_string()),
            error_code: None,
            speak,
        },
        Err(err) => VoiceReplyResponse {
            ok: false,
            intent: None,
            message: err.to_string(),
            entry_id: None,
            error_code: Some(err.code().to_string()),
            speak,
        },
    }
}

/// Resolves time/day labels without touching assistant state.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_resolve_datetime(utterance: String) -> DateTimeResponse {
    let spec = resolve(utterance.as_str());
    DateTimeResponse {
        clock_time: spec.clock_label(),
        day_label: spec.day_label().to_string(),
    }
}

/// Lists tasks in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_list_tasks() -> Vec<TaskItem> {
    lock(assistant()).tasks().iter().map(to_task_item).collect()
}

/// Lists events in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_list_events() -> Vec<EventItem> {
    lock(assistant()).events().iter().map(to_event_item).collect()
}

/// Flips completion of one task.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_toggle_task(task_id: String) -> EntryActionResponse {
    let Some(id) = parse_id(task_id.as_str()) else {
        return EntryActionResponse::failure(format!("invalid task id: {task_id}"));
    };
    match lock(assistant()).toggle_task(id) {
        Some(true) => EntryActionResponse::success("Task completed."),
        Some(false) => EntryActionResponse::success("Task reopened."),
        None => EntryActionResponse::failure(format!("task not found: {id}")),
    }
}

/// Removes one task.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_remove_task(task_id: String) -> EntryActionResponse {
    let Some(id) = parse_id(task_id.as_str()) else {
        return EntryActionResponse::failure(format!("invalid task id: {task_id}"));
    };
    match lock(assistant()).remove_task(id) {
        Some(_) => EntryActionResponse::success("Task removed."),
        None => EntryActionResponse::failure(format!("task not found: {id}")),
    }
}

/// Removes one event.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_remove_event(event_id: String) -> EntryActionResponse {
    let Some(id) = parse_id(event_id.as_str()) else {
        return EntryActionResponse::failure(format!("invalid event id: {event_id}"));
    };
    match lock(assistant()).remove_event(id) {
        Some(_) => EntryActionResponse::success("Event removed."),
        None => EntryActionResponse::failure(format!("event not found: {id}")),
    }
}

/// Updates spoken feedback toggle and locale.
///
/// Returns empty string on success and error message on failure; the
/// previous settings stay active on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_configure(spoken_feedback: bool, locale: String) -> String {
    match VoiceSettings::new(spoken_feedback, locale.as_str()) {
        Ok(settings) => {
            *lock(self::settings()) = settings;
            String::new()
        }
        Err(err) => err.to_string(),
    }
}

/// Returns the active locale code used for recognition and synthesis.
#[flutter_rust_bridge::frb(sync)]
pub fn voice_locale() -> String {
    lock(settings()).locale.clone()
}

fn assistant() -> &'static Mutex<AssistantService> {
    ASSISTANT.get_or_init(|| Mutex::new(AssistantService::new()))
}

fn settings() -> &'static Mutex<VoiceSettings> {
    SETTINGS.get_or_init(|| Mutex::new(VoiceSettings::default()))
}

/// Recovers the guard from a poisoned lock instead of panicking.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("event=lock_recovered module=ffi status=warn");
        PoisonError::into_inner(poisoned)
    })
}

fn parse_id(value: &str) -> Option<Uuid> {
    Uuid::parse_str(value.trim()).ok()
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        text: task.text.clone(),
        completed: task.completed,
    }
}

fn to_event_item(event: &Event) -> EventItem {
    EventItem {
        id: event.id.to_string(),
        title: event.title.clone(),
        time: event.time.clone(),
        date: event.date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, voice_configure, voice_handle, voice_list_events,
        voice_list_tasks, voice_remove_event, voice_resolve_datetime, voice_toggle_task,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir() {
        let error = init_logging("info".to_string(), "tmp/logs".to_string());
        assert!(error.contains("absolute"));
    }

    #[test]
    fn voice_handle_creates_task_and_lists_it() {
        let token = unique_token("ffi-task");
        let response = voice_handle(format!("add task to {token}"));
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.intent.as_deref(), Some("add_task"));
        let created_id = response.entry_id.expect("task id");

        let item = voice_list_tasks()
            .into_iter()
            .find(|item| item.id == created_id)
            .expect("created task listed");
        assert_eq!(item.text, token);
        assert!(!item.completed);

        let toggled = voice_toggle_task(created_id);
        assert!(toggled.ok);
        assert_eq!(toggled.message, "Task completed.");
    }

    #[test]
    fn voice_handle_reports_empty_utterance_code() {
        let response = voice_handle("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.error_code.as_deref(), Some("empty_utterance"));
        assert!(response.entry_id.is_none());
    }

    #[test]
    fn voice_remove_event_rejects_unknown_and_invalid_ids() {
        let token = unique_token("ffi-event");
        let response = voice_handle(format!("add meeting {token} at 4 pm"));
        let event_id = response.entry_id.expect("event id");
        assert!(voice_list_events().iter().any(|item| item.id == event_id));

        assert!(voice_remove_event(event_id.clone()).ok);
        assert!(!voice_remove_event(event_id).ok);
        assert!(!voice_remove_event("not-a-uuid".to_string()).ok);
    }

    #[test]
    fn voice_resolve_datetime_returns_labels() {
        let response = voice_resolve_datetime("tomorrow at 3 pm".to_string());
        assert_eq!(response.clock_time.as_deref(), Some("3:00 PM"));
        assert_eq!(response.day_label, "Tomorrow");
    }

    #[test]
    fn voice_configure_rejects_invalid_locale() {
        assert!(!voice_configure(true, "???".to_string()).is_empty());
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
