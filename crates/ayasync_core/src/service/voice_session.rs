//! Listening session wiring capture, assistant and speech output.
//!
//! # Responsibility
//! - Gate capture behind microphone permission.
//! - Feed one terminal transcript through the assistant pipeline.
//! - Speak the reply when spoken feedback is enabled.
//!
//! # Invariants
//! - One session call runs to completion before the next is accepted
//!   (`&mut self`).
//! - Errors are returned to the host for display; nothing is retried.

use crate::config::{SettingsError, VoiceSettings};
use crate::platform::speech::{SpeechCapture, SpeechOutput};
use crate::platform::Permission;
use crate::service::assistant_service::{AssistantService, Reply};
use crate::service::error::VoiceError;
use log::{info, warn};

/// Voice front door over injected device capabilities.
pub struct VoiceSession<C: SpeechCapture, O: SpeechOutput> {
    capture: C,
    output: O,
    settings: VoiceSettings,
    assistant: AssistantService,
}

impl<C: SpeechCapture, O: SpeechOutput> VoiceSession<C, O> {
    pub fn new(capture: C, output: O, settings: VoiceSettings) -> Self {
        Self {
            capture,
            output,
            settings,
            assistant: AssistantService::new(),
        }
    }

    /// Captures one utterance and runs it through the assistant.
    ///
    /// # Errors
    /// - `PermissionDenied(Microphone)` when capture access is refused.
    /// - `Capture` when the recognizer fails.
    /// - `EmptyUtterance` when the transcript is blank.
    pub fn listen_once(&mut self) -> Result<Reply, VoiceError> {
        if !self.capture.request_permission() {
            warn!("event=listen module=session status=error code=permission_denied");
            return Err(VoiceError::PermissionDenied(Permission::Microphone));
        }

        let transcript = self
            .capture
            .capture(self.settings.locale.as_str())
            .map_err(|err| {
                warn!("event=listen module=session status=error code=capture_failed");
                VoiceError::from(err)
            })?;
        info!(
            "event=listen module=session status=ok transcript_chars={}",
            transcript.chars().count()
        );
        self.respond(&transcript)
    }

    /// Runs typed or externally captured text through the assistant.
    pub fn respond(&mut self, utterance: &str) -> Result<Reply, VoiceError> {
        let reply = self.assistant.handle(utterance)?;
        self.speak(&reply.message);
        Ok(reply)
    }

    /// Speaks `message` if spoken feedback is enabled.
    pub fn speak(&self, message: &str) {
        if self.settings.spoken_feedback {
            self.output.speak(message, &self.settings.speech_params());
        }
    }

    /// Replaces settings after validation; keeps the old ones on error.
    pub fn update_settings(&mut self, mut settings: VoiceSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn settings(&self) -> &VoiceSettings {
        &self.settings
    }

    pub fn assistant(&self) -> &AssistantService {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut AssistantService {
        &mut self.assistant
    }
}
