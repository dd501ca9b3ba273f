//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod note;
pub mod pipeline;
pub mod transcript;

// Re-export common types
pub use audio::{AudioData, AudioMimeType};
pub use config::{AiServiceConfig, AppConfig};
pub use error::*;
pub use note::{format_soap, FormatRequest, NoteSection, SectionTag, SoapPrompt, StructuredNote};
pub use pipeline::{InvalidStateTransition, PipelineSession, PipelineState};
pub use transcript::Transcript;
