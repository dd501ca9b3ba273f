//! Speech recognition port interface
//!
//! The platform speech engine is an external collaborator; this port models
//! its continuous result stream as a pull-based signal sequence instead of
//! the original event callbacks.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

/// One result fragment from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionFragment {
    pub text: String,
    pub is_final: bool,
}

impl RecognitionFragment {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}

/// One recognizer update: the fragments from `result_index` onward.
/// Fragments arrive in increasing index order within an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionEvent {
    pub result_index: usize,
    pub results: Vec<RecognitionFragment>,
}

/// Signals delivered over the recognition stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerSignal {
    /// A result update
    Event(RecognitionEvent),
    /// The engine stopped on its own (silence, engine policy)
    Ended,
    /// The engine reported an error; the stream is over
    Error(String),
}

/// Recognizer errors
#[derive(Debug, Clone, Error)]
pub enum RecognizerError {
    #[error("Speech recognition is not available in this environment")]
    NotAvailable,

    #[error("Recognition is already active")]
    AlreadyActive,

    #[error("Failed to start recognition: {0}")]
    StartFailed(String),

    #[error("Failed to stop recognition: {0}")]
    StopFailed(String),
}

/// Receiving half of a recognition stream
pub type RecognitionStream = mpsc::UnboundedReceiver<RecognizerSignal>;

/// Port for continuous speech capture with interim results
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Whether the hosting environment exposes continuous recognition
    fn is_available(&self) -> bool;

    /// Start continuous capture.
    ///
    /// # Returns
    /// The signal stream for this capture run
    async fn start(&self) -> Result<RecognitionStream, RecognizerError>;

    /// Request the engine halt. The stream ends shortly after.
    async fn stop(&self) -> Result<(), RecognizerError>;
}
