//! Domain model for voice commands and the entries they create.
//!
//! # Responsibility
//! - Define intents, resolved date/time references, tasks and events.
//! - Keep value rendering (labels, defaults) next to the types.
//!
//! # Invariants
//! - Every task/event is identified by a unique `EntryId`.
//! - Nothing in this module is persisted.

pub mod entry;
pub mod intent;
pub mod time_spec;
