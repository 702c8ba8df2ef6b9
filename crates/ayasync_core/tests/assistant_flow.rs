use ayasync_core::{AssistantService, Intent, Shortcut, VoiceError};
use chrono::{NaiveDate, NaiveDateTime};

fn at_hour(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid timestamp")
}

#[test]
fn remind_me_creates_task_with_day_and_time_suffix() {
    let mut assistant = AssistantService::new();
    let reply = assistant
        .handle_at("Remind me to call Sarah next Wednesday at 3 PM", at_hour(9))
        .expect("task command");

    assert_eq!(
        reply.intent,
        Intent::AddTask("call Sarah next Wednesday at 3 PM".to_string())
    );
    let expected = "call Sarah next Wednesday at 3 PM (Wednesday at 3:00 PM)";
    assert_eq!(reply.message, format!("Task added: {expected}"));

    let tasks = assistant.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, expected);
    assert!(!tasks[0].completed);
    assert_eq!(reply.created, Some(tasks[0].id));
}

#[test]
fn add_meeting_creates_event_titled_before_first_at() {
    let mut assistant = AssistantService::new();
    let reply = assistant
        .handle_at("Add meeting with client tomorrow at 2:30 PM", at_hour(9))
        .expect("event command");

    let event = &assistant.events()[0];
    assert_eq!(event.title, "with client tomorrow");
    assert_eq!(event.time, "2:30 PM");
    assert_eq!(event.date, "Tomorrow");
    assert_eq!(
        reply.message,
        "Event scheduled: with client tomorrow on Tomorrow at 2:30 PM"
    );
}

#[test]
fn event_without_time_defaults_to_nine_today() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("schedule a meeting for budget review", at_hour(9))
        .expect("event command");

    let event = &assistant.events()[0];
    assert_eq!(event.title, "for budget review");
    assert_eq!(event.time, "9:00 AM");
    assert_eq!(event.date, "Today");
}

#[test]
fn schedule_query_reads_only_todays_events() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add meeting standup at 9:30 am", at_hour(8))
        .expect("today event");
    assistant
        .handle_at("add meeting retro tomorrow at 4 pm", at_hour(8))
        .expect("tomorrow event");

    let reply = assistant
        .handle_at("What's my schedule today?", at_hour(8))
        .expect("schedule query");
    assert_eq!(reply.intent, Intent::ScheduleQuery);
    assert_eq!(reply.message, "You have 1 event today: standup at 9:30 AM.");
    assert_eq!(assistant.events().len(), 2);
}

#[test]
fn shortcut_and_query_share_readouts() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add task to file taxes", at_hour(10))
        .expect("task");

    let shortcut = assistant
        .handle_at("show today's tasks", at_hour(10))
        .expect("shortcut");
    let query = assistant
        .handle_at("anything on my todo list", at_hour(10))
        .expect("query");
    assert_eq!(shortcut.intent, Intent::Shortcut(Shortcut::TodaysTasks));
    assert_eq!(query.intent, Intent::TaskQuery);
    assert_eq!(shortcut.message, query.message);
    assert_eq!(shortcut.message, "You have 1 pending task: file taxes.");
}

#[test]
fn unrecognized_leaves_lists_untouched() {
    let mut assistant = AssistantService::new();
    let reply = assistant
        .handle_at("blah blah nonsense", at_hour(10))
        .expect("fallback reply");
    assert_eq!(reply.intent, Intent::Unrecognized);
    assert!(reply.message.starts_with("Sorry, I didn't understand that."));
    assert!(reply.created.is_none());
    assert!(assistant.tasks().is_empty());
    assert!(assistant.events().is_empty());
}

#[test]
fn daily_overview_with_no_pending_tasks_is_caught_up() {
    let mut assistant = AssistantService::new();
    let id = assistant
        .handle_at("add task to stretch", at_hour(7))
        .expect("task")
        .created
        .expect("task id");
    assistant.toggle_task(id).expect("task exists");

    let reply = assistant
        .handle_at("daily overview", at_hour(7))
        .expect("overview");
    assert!(reply.message.starts_with("Good morning!"));
    assert!(reply.message.contains("You have no events scheduled for today."));
    assert!(reply
        .message
        .contains("You have no pending tasks. You're all caught up!"));
}

#[test]
fn daily_overview_lists_todays_events_and_counts_tasks() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add meeting lunch with Ana at 12:30 pm", at_hour(13))
        .expect("event");
    assistant
        .handle_at("add task to book flights", at_hour(13))
        .expect("task");
    assistant
        .handle_at("remind me to renew passport", at_hour(13))
        .expect("task");

    let reply = assistant
        .handle_at("daily overview", at_hour(13))
        .expect("overview");
    assert_eq!(
        reply.message,
        "Good afternoon! Here's your daily overview. You have 1 event today: \
lunch with Ana at 12:30 PM. You have 2 pending tasks."
    );
}

#[test]
fn entries_keep_insertion_order_and_unique_ids() {
    let mut assistant = AssistantService::new();
    for index in 0..20 {
        assistant
            .handle_at(&format!("add task to item {index}"), at_hour(9))
            .expect("task");
    }
    let texts = assistant
        .tasks()
        .iter()
        .map(|task| task.text.clone())
        .collect::<Vec<_>>();
    let expected = (0..20).map(|index| format!("item {index}")).collect::<Vec<_>>();
    assert_eq!(texts, expected);

    let mut ids = assistant.tasks().iter().map(|task| task.id).collect::<Vec<_>>();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn focus_mode_has_no_side_effects() {
    let mut assistant = AssistantService::new();
    let reply = assistant
        .handle_at("start focus mode", at_hour(9))
        .expect("focus");
    assert!(reply.message.starts_with("Focus mode activated."));
    assert!(assistant.tasks().is_empty());
}

#[test]
fn empty_utterance_surfaces_guidance() {
    let mut assistant = AssistantService::new();
    let err = assistant.handle_at("", at_hour(9)).expect_err("empty");
    assert!(matches!(err, VoiceError::EmptyUtterance { .. }));
    assert!(err.to_string().starts_with("Please say something like"));
}

#[test]
fn remove_event_keeps_remaining_order() {
    let mut assistant = AssistantService::new();
    let first = assistant
        .handle_at("add meeting one", at_hour(9))
        .expect("event")
        .created
        .expect("id");
    assistant
        .handle_at("add meeting two", at_hour(9))
        .expect("event");
    assistant
        .handle_at("add meeting three", at_hour(9))
        .expect("event");

    assert_eq!(assistant.remove_event(first).map(|event| event.title), Some("one".to_string()));
    let titles = assistant
        .events()
        .iter()
        .map(|event| event.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["two", "three"]);
    assert_eq!(assistant.todays_events().count(), 2);
}

#[test]
fn mark_as_done_completes_matching_pending_task() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add task to buy milk", at_hour(9))
        .expect("task");
    assistant
        .handle_at("add task to call Sarah", at_hour(9))
        .expect("task");

    let reply = assistant
        .handle_at("Mark CALL SARAH as done", at_hour(9))
        .expect("completion");
    assert_eq!(reply.intent, Intent::CompleteTask(Some("CALL SARAH".to_string())));
    assert_eq!(reply.message, "Task completed: call Sarah");
    assert!(reply.created.is_none());

    let pending = assistant
        .pending_tasks()
        .map(|task| task.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(pending, ["buy milk"]);
    assert_eq!(assistant.tasks().len(), 2);
}

#[test]
fn generic_completion_picks_oldest_pending_task() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add task to first thing", at_hour(9))
        .expect("task");
    assistant
        .handle_at("add task to second thing", at_hour(9))
        .expect("task");

    let reply = assistant
        .handle_at("Mark task as complete", at_hour(9))
        .expect("completion");
    assert_eq!(reply.message, "Task completed: first thing");
    assert!(assistant.tasks()[0].completed);
    assert!(!assistant.tasks()[1].completed);
}

#[test]
fn completion_without_match_reports_not_found() {
    let mut assistant = AssistantService::new();
    assistant
        .handle_at("add task to buy milk", at_hour(9))
        .expect("task");

    let reply = assistant
        .handle_at("finish the laundry", at_hour(9))
        .expect("completion");
    assert_eq!(
        reply.message,
        "I couldn't find a pending task matching \"laundry\"."
    );
    assert_eq!(assistant.pending_tasks().count(), 1);

    let mut empty = AssistantService::new();
    let reply = empty
        .handle_at("Mark task as complete", at_hour(9))
        .expect("completion");
    assert_eq!(reply.message, "You have no pending tasks. You're all caught up!");
}
