//! Classified purpose of one utterance.

use serde::{Deserialize, Serialize};

/// Canned voice command that bypasses task/event extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortcut {
    /// Activates focus mode.
    FocusMode,
    /// Reads out pending tasks.
    TodaysTasks,
    /// Reads out today's events.
    ReadSchedule,
    /// Greeting plus events and task summary.
    DailyOverview,
}

impl Shortcut {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FocusMode => "focus_mode",
            Self::TodaysTasks => "todays_tasks",
            Self::ReadSchedule => "read_schedule",
            Self::DailyOverview => "daily_overview",
        }
    }
}

/// Result of intent classification.
///
/// Produced fresh per utterance and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    Shortcut(Shortcut),
    /// Trimmed task text captured after the command phrase.
    AddTask(String),
    /// Trimmed event text captured after the command phrase.
    AddEvent(String),
    /// Marks a pending task done. `None` targets the oldest pending task.
    CompleteTask(Option<String>),
    ScheduleQuery,
    TaskQuery,
    Unrecognized,
}

impl Intent {
    /// Stable tag used in logs and FFI envelopes. Never includes payload text.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Shortcut(_) => "shortcut",
            Self::AddTask(_) => "add_task",
            Self::AddEvent(_) => "add_event",
            Self::CompleteTask(_) => "complete_task",
            Self::ScheduleQuery => "schedule_query",
            Self::TaskQuery => "task_query",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Whether the intent needs datetime resolution before synthesis.
    pub fn needs_time(&self) -> bool {
        matches!(self, Self::AddTask(_) | Self::AddEvent(_))
    }
}
