//! Dictation session use case
//!
//! Wraps a speech recognizer stream, accumulating finalized fragments and
//! exposing live display text through an update callback. Finalized text is
//! never revised; interim text is display-only and discarded on stop.

use thiserror::Error;

use crate::domain::transcript::Transcript;

use super::ports::{
    RecognitionEvent, RecognitionStream, RecognizerError, RecognizerSignal, SpeechRecognizer,
};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Listening,
}

/// Events surfaced to the session consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Display text changed (finalized + interim)
    Update(String),
    /// The engine ended the stream unsolicited. The session does not
    /// restart on its own; the consumer decides whether to start again.
    Stalled,
    /// The engine reported an error; the session is back to Idle
    Failed(String),
}

/// Errors from session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Speech recognition is not available in this environment")]
    NotAvailable,

    #[error("A dictation session is already listening")]
    AlreadyListening,

    #[error(transparent)]
    Recognizer(#[from] RecognizerError),
}

/// Update callback type, invoked with the current display text
pub type UpdateCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Long-lived dictation session over a speech recognizer.
/// Reusable: stop returns the session to Idle, ready for the next start.
pub struct TranscriptionSession<R: SpeechRecognizer> {
    recognizer: R,
    state: SessionState,
    transcript: Transcript,
    stream: Option<RecognitionStream>,
    on_update: Option<UpdateCallback>,
}

impl<R: SpeechRecognizer> TranscriptionSession<R> {
    /// Create a new idle session over the given recognizer
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            state: SessionState::Idle,
            transcript: Transcript::new(),
            stream: None,
            on_update: None,
        }
    }

    /// Whether the environment supports dictation at all
    pub fn is_available(&self) -> bool {
        self.recognizer.is_available()
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Register the display-text callback
    pub fn set_on_update(&mut self, callback: UpdateCallback) {
        self.on_update = Some(callback);
    }

    /// Start listening. Clears the transcript buffer first.
    pub async fn start(&mut self) -> Result<(), SessionError> {
        if !self.recognizer.is_available() {
            return Err(SessionError::NotAvailable);
        }
        if self.state == SessionState::Listening {
            return Err(SessionError::AlreadyListening);
        }

        self.transcript.clear();
        let stream = self.recognizer.start().await?;
        self.stream = Some(stream);
        self.state = SessionState::Listening;
        Ok(())
    }

    /// Pull the next session event. Returns None when the stream is over
    /// (after stop, or once a terminal signal was consumed).
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        let stream = self.stream.as_mut()?;

        match stream.recv().await {
            Some(RecognizerSignal::Event(event)) => {
                self.apply_event(&event);
                Some(SessionEvent::Update(self.transcript.display_text()))
            }
            Some(RecognizerSignal::Ended) => {
                // Unsolicited end of stream: no silent restart.
                self.state = SessionState::Idle;
                self.stream = None;
                Some(SessionEvent::Stalled)
            }
            Some(RecognizerSignal::Error(message)) => {
                self.state = SessionState::Idle;
                self.stream = None;
                Some(SessionEvent::Failed(message))
            }
            None => {
                self.state = SessionState::Idle;
                self.stream = None;
                None
            }
        }
    }

    /// Fold one recognizer update into the transcript: finalized fragments
    /// are appended in delivery order, the interim tail is replaced with
    /// this event's interim fragments.
    pub fn apply_event(&mut self, event: &RecognitionEvent) {
        let mut interim = String::new();
        for fragment in &event.results {
            if fragment.is_final {
                self.transcript.push_final(&fragment.text);
            } else {
                interim.push_str(&fragment.text);
            }
        }
        self.transcript.set_interim(interim);

        if let Some(ref callback) = self.on_update {
            callback(&self.transcript.display_text());
        }
    }

    /// Stop listening and return the accumulated finalized transcript.
    /// The interim tail at the moment of stop is discarded. Calling stop
    /// while Idle returns the current (possibly empty) finalized text.
    pub async fn stop(&mut self) -> String {
        if self.state == SessionState::Listening {
            self.state = SessionState::Idle;
            self.stream = None;
            if let Err(e) = self.recognizer.stop().await {
                eprintln!("Warning: failed to stop recognizer: {}", e);
            }
        }
        self.transcript.clear_interim();
        self.transcript.finalized().to_string()
    }

    /// Clear the transcript and notify the callback with empty text
    pub fn reset(&mut self) {
        self.transcript.clear();
        if let Some(ref callback) = self.on_update {
            callback("");
        }
    }
}
