//! Note formatting use case
//!
//! Dispatch policy: when a generator is wired, try the AI path; any failure
//! there falls back to the rule-based SOAP formatter for the same request.
//! The operation as a whole never fails.

use std::sync::Arc;

use crate::domain::note::{format_soap, FormatRequest};

use super::ports::NoteGenerator;

/// Which engine produced the note text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEngine {
    Generator,
    Heuristic,
}

/// Result of a formatting dispatch
#[derive(Debug, Clone)]
pub struct FormatOutcome {
    /// The formatted note text
    pub text: String,
    /// The engine that produced it
    pub engine: NoteEngine,
    /// Set when the generator failed and the heuristic stood in
    pub fallback_reason: Option<String>,
}

/// Formatting use case
pub struct FormatNoteUseCase {
    generator: Option<Arc<dyn NoteGenerator>>,
}

impl FormatNoteUseCase {
    /// Create a use case with an optional AI generator
    pub fn new(generator: Option<Arc<dyn NoteGenerator>>) -> Self {
        Self { generator }
    }

    /// Create a heuristic-only use case
    pub fn heuristic_only() -> Self {
        Self { generator: None }
    }

    /// Whether the AI path is wired
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Format a transcript into a structured note
    pub async fn format(&self, request: &FormatRequest) -> FormatOutcome {
        if let Some(ref generator) = self.generator {
            match generator
                .generate_text(request.prompt().content(), request.transcript())
                .await
            {
                Ok(text) => {
                    return FormatOutcome {
                        text,
                        engine: NoteEngine::Generator,
                        fallback_reason: None,
                    }
                }
                Err(e) => {
                    return FormatOutcome {
                        text: format_soap(request.transcript()).render(),
                        engine: NoteEngine::Heuristic,
                        fallback_reason: Some(e.to_string()),
                    }
                }
            }
        }

        FormatOutcome {
            text: format_soap(request.transcript()).render(),
            engine: NoteEngine::Heuristic,
            fallback_reason: None,
        }
    }
}
