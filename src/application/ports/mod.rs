//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod generator;
pub mod recognizer;

// Re-export common types
pub use config::ConfigStore;
pub use generator::{GenerationError, NoteGenerator};
pub use recognizer::{
    RecognitionEvent, RecognitionFragment, RecognitionStream, RecognizerError, RecognizerSignal,
    SpeechRecognizer,
};
