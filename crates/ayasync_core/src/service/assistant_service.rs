//! Voice assistant controller.
//!
//! # Responsibility
//! - Own the in-memory task and event lists.
//! - Run one utterance through classify, resolve, combine and respond.
//!
//! # Invariants
//! - Lists preserve insertion order.
//! - Only add-task and add-event commands append to the lists.
//! - A completion command marks at most one pending task done.
//! - Each call completes the whole pipeline before returning.

use crate::model::entry::{EntryId, Event, Task};
use crate::model::intent::{Intent, Shortcut};
use crate::parser::datetime::resolve;
use crate::parser::intent::classify;
use crate::service::error::VoiceError;
use crate::service::response::{self, COMMAND_HINT, FALLBACK_MESSAGE, FOCUS_MODE_MESSAGE};
use chrono::{Local, NaiveDateTime, Timelike};
use log::info;

/// Outcome of one handled utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    /// Confirmation or read-out to show and speak.
    pub message: String,
    /// ID of the task or event appended by this command, if any.
    pub created: Option<EntryId>,
}

/// Single owner of assistant state.
#[derive(Debug, Default)]
pub struct AssistantService {
    tasks: Vec<Task>,
    events: Vec<Event>,
}

impl AssistantService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one utterance against the local wall clock.
    pub fn handle(&mut self, utterance: &str) -> Result<Reply, VoiceError> {
        self.handle_at(utterance, Local::now().naive_local())
    }

    /// Handles one utterance with an explicit current time.
    ///
    /// # Errors
    /// - `EmptyUtterance` when the transcript is blank. No list is touched.
    pub fn handle_at(&mut self, utterance: &str, now: NaiveDateTime) -> Result<Reply, VoiceError> {
        if utterance.trim().is_empty() {
            info!("event=command_handled module=service status=error code=empty_utterance");
            return Err(VoiceError::EmptyUtterance { hint: COMMAND_HINT });
        }

        let intent = classify(utterance);
        let (message, created) = match &intent {
            Intent::AddTask(raw_text) => {
                let spec = resolve(utterance);
                let task = Task::new(response::task_text(raw_text, &spec));
                let message = response::task_added(&task);
                let id = task.id;
                self.tasks.push(task);
                (message, Some(id))
            }
            Intent::AddEvent(raw_text) => {
                let spec = resolve(utterance);
                let event = Event::new(
                    response::event_title(raw_text),
                    spec.clock_label(),
                    Some(spec.day_label().to_string()),
                );
                let message = response::event_scheduled(&event);
                let id = event.id;
                self.events.push(event);
                (message, Some(id))
            }
            Intent::CompleteTask(target) => (self.complete_matching(target.as_deref()), None),
            Intent::Shortcut(shortcut) => (self.shortcut_message(*shortcut, now), None),
            Intent::ScheduleQuery => (response::schedule_readout(&self.events), None),
            Intent::TaskQuery => (response::task_readout(&self.tasks), None),
            Intent::Unrecognized => (FALLBACK_MESSAGE.to_string(), None),
        };

        info!(
            "event=command_handled module=service status=ok intent={} tasks={} events={}",
            intent.kind_label(),
            self.tasks.len(),
            self.events.len()
        );
        Ok(Reply {
            intent,
            message,
            created,
        })
    }

    fn shortcut_message(&self, shortcut: Shortcut, now: NaiveDateTime) -> String {
        match shortcut {
            Shortcut::FocusMode => FOCUS_MODE_MESSAGE.to_string(),
            Shortcut::TodaysTasks => response::task_readout(&self.tasks),
            Shortcut::ReadSchedule => response::schedule_readout(&self.events),
            Shortcut::DailyOverview => {
                response::daily_overview(now.hour(), &self.tasks, &self.events)
            }
        }
    }

    /// Marks the oldest pending task whose text contains `target`
    /// (case-insensitive) as done. `None` picks the oldest pending task.
    fn complete_matching(&mut self, target: Option<&str>) -> String {
        let needle = target.map(str::to_lowercase);
        let found = self
            .tasks
            .iter_mut()
            .filter(|task| task.is_pending())
            .find(|task| {
                needle
                    .as_deref()
                    .map_or(true, |needle| task.text.to_lowercase().contains(needle))
            });
        match found {
            Some(task) => {
                task.toggle();
                response::task_completed(task)
            }
            None => response::task_not_found(target),
        }
    }

    /// Flips completion of one task; returns the new state.
    pub fn toggle_task(&mut self, id: EntryId) -> Option<bool> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .map(Task::toggle)
    }

    /// Removes one task, keeping the order of the rest.
    pub fn remove_task(&mut self, id: EntryId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Removes one event, keeping the order of the rest.
    pub fn remove_event(&mut self, id: EntryId) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_pending())
    }

    pub fn todays_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|event| event.is_today())
    }
}
