//! Voice command interpretation entry points.
//!
//! # Responsibility
//! - Classify raw utterances into intents with ordered pattern cascades.
//! - Extract clock time and day references independently of intent.
//!
//! # Invariants
//! - Every function here is pure and never fails; absence is represented
//!   in the return value.
//! - Pattern tables are evaluated in declaration order; first match wins.

pub mod datetime;
pub mod intent;
