use ayasync_core::{Event, Task};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("water plants");
    assert!(!task.id.is_nil());
    assert_eq!(task.text, "water plants");
    assert!(!task.completed);
    assert!(task.is_pending());
}

#[test]
fn task_toggle_flips_completion() {
    let mut task = Task::new("stretch");
    assert!(task.toggle());
    assert!(!task.is_pending());
    assert!(!task.toggle());
}

#[test]
fn event_new_applies_defaults() {
    let event = Event::new("standup", None, None);
    assert_eq!(event.time, "9:00 AM");
    assert_eq!(event.date, "Today");
    assert!(event.is_today());

    let later = Event::new("retro", Some("4:00 PM".to_string()), Some("Friday".to_string()));
    assert!(!later.is_today());
}

#[test]
fn ids_are_unique_across_rapid_creation() {
    let first = Task::new("a");
    let second = Task::new("a");
    assert_ne!(first.id, second.id);
}

#[test]
fn entries_serialize_with_expected_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let event = Event {
        id,
        title: "with client tomorrow".to_string(),
        time: "2:30 PM".to_string(),
        date: "Tomorrow".to_string(),
    };

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "with client tomorrow");
    assert_eq!(json["time"], "2:30 PM");
    assert_eq!(json["date"], "Tomorrow");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);

    let task_json = serde_json::to_value(Task::new("buy milk")).unwrap();
    assert_eq!(task_json["completed"], false);
    assert_eq!(task_json["text"], "buy milk");
}
