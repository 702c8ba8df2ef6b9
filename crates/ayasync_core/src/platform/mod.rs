//! Device capability contracts consumed by the core.
//!
//! # Responsibility
//! - Declare the narrow interfaces for speech capture, speech output and
//!   the device calendar.
//! - Keep platform bindings out of core so pipelines run against stubs.
//!
//! # Invariants
//! - Core never talks to device APIs directly; hosts inject trait objects.
//! - Permission checks happen before any capture or calendar write.

pub mod calendar;
pub mod speech;

use std::fmt::{Display, Formatter};

/// Device permission gating one capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Microphone,
    Calendar,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Microphone => "microphone",
            Self::Calendar => "calendar",
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
