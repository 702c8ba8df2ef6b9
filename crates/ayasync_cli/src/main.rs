//! Console probe for the voice command pipeline.
//!
//! # Responsibility
//! - Verify `ayasync_core` linkage and print deterministic version lines.
//! - Stand in for device speech and calendar capabilities with stdin/stdout.
//!
//! Typed lines play the role of terminal transcripts. `/appointment <text>`
//! routes through the calendar flow; `/tasks` and `/events` dump state;
//! `/quit` exits.

use ayasync_core::{
    AppointmentService, CalendarError, CalendarInfo, CalendarProvider, CaptureError,
    NewCalendarEvent, SpeechCapture, SpeechOutput, SpeechParams, VoiceSession, VoiceSettings,
};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

const LOG_DIR_ENV: &str = "AYASYNC_LOG_DIR";
const PROMPT: &str = "say> ";

/// Hands the most recently typed line to the session as a transcript.
struct TypedCapture {
    pending: Rc<RefCell<Option<String>>>,
}

impl SpeechCapture for TypedCapture {
    fn request_permission(&mut self) -> bool {
        true
    }

    fn capture(&mut self, _locale: &str) -> Result<String, CaptureError> {
        self.pending.borrow_mut().take().ok_or(CaptureError::NoMatch)
    }
}

struct ConsoleOutput;

impl SpeechOutput for ConsoleOutput {
    fn speak(&self, message: &str, params: &SpeechParams) {
        println!("[{}] {message}", params.language);
    }
}

/// In-memory calendar that accepts every write.
#[derive(Default)]
struct ConsoleCalendar {
    created: usize,
}

impl CalendarProvider for ConsoleCalendar {
    fn request_permission(&mut self) -> bool {
        true
    }

    fn list_calendars(&self) -> Result<Vec<CalendarInfo>, CalendarError> {
        Ok(vec![CalendarInfo {
            id: "console".to_string(),
            title: "Console".to_string(),
            allows_modifications: true,
        }])
    }

    fn create_event(
        &mut self,
        calendar_id: &str,
        event: &NewCalendarEvent,
    ) -> Result<String, CalendarError> {
        self.created += 1;
        println!(
            "calendar={calendar_id} start={} end={}",
            event.start, event.end
        );
        Ok(format!("console-{}", self.created))
    }
}

fn main() {
    println!("ayasync_core ping={}", ayasync_core::ping());
    println!("ayasync_core version={}", ayasync_core::core_version());

    if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = ayasync_core::init_logging(ayasync_core::default_log_level(), &dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let pending = Rc::new(RefCell::new(None));
    let capture = TypedCapture {
        pending: Rc::clone(&pending),
    };
    let mut session = VoiceSession::new(capture, ConsoleOutput, VoiceSettings::default());
    let mut appointments = AppointmentService::new(ConsoleCalendar::default());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("stdin error: {err}");
                break;
            }
            None => break,
        };

        match line.trim() {
            "/quit" => break,
            "/tasks" => {
                for task in session.assistant().tasks() {
                    let mark = if task.completed { "x" } else { " " };
                    println!("[{mark}] {} {}", task.id, task.text);
                }
            }
            "/events" => {
                for event in session.assistant().events() {
                    println!("{} {} | {} | {}", event.id, event.title, event.date, event.time);
                }
            }
            command if command.starts_with("/appointment") => {
                let utterance = command.trim_start_matches("/appointment");
                match appointments.save(utterance) {
                    Ok(saved) => session.speak(&saved.message),
                    Err(err) => eprintln!("{err}"),
                }
            }
            _ => {
                *pending.borrow_mut() = Some(line.clone());
                if let Err(err) = session.listen_once() {
                    eprintln!("{err}");
                }
            }
        }
    }
}
