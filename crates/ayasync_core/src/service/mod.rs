//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsers and device capabilities into voice use cases.
//! - Keep UI/FFI layers decoupled from interpretation details.

pub mod appointment_service;
pub mod assistant_service;
pub mod error;
pub mod response;
pub mod voice_session;
