//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod file_transcribe;
pub mod format;
pub mod pipeline;
pub mod ports;
pub mod session;

// Re-export use cases
pub use file_transcribe::{FileTranscribeError, FileTranscriber};
pub use format::{FormatNoteUseCase, FormatOutcome, NoteEngine};
pub use pipeline::{IngestOutcome, NotePipeline, PipelineError};
pub use session::{SessionError, SessionEvent, SessionState, TranscriptionSession};
