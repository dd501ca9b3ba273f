//! Note pipeline orchestrator
//!
//! Ties the pipeline state machine to the use cases. Every entry point
//! leaves the session Idle again, including failure paths, so a follow-up
//! action is always possible.

use std::path::Path;

use thiserror::Error;

use crate::domain::note::{FormatRequest, SoapPrompt};
use crate::domain::pipeline::{InvalidStateTransition, PipelineSession, PipelineState};

use super::file_transcribe::{FileTranscribeError, FileTranscriber};
use super::format::{FormatNoteUseCase, FormatOutcome};

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    State(#[from] InvalidStateTransition),

    #[error(transparent)]
    File(#[from] FileTranscribeError),
}

/// Result of a file ingest: the transcript and, when it was non-empty,
/// the formatted note
#[derive(Debug)]
pub struct IngestOutcome {
    pub transcript: String,
    pub note: Option<FormatOutcome>,
}

/// Orchestrates record/ingest actions into formatted notes
pub struct NotePipeline {
    session: PipelineSession,
    formatter: FormatNoteUseCase,
    files: FileTranscriber,
}

impl NotePipeline {
    pub fn new(formatter: FormatNoteUseCase, files: FileTranscriber) -> Self {
        Self {
            session: PipelineSession::new(),
            formatter,
            files,
        }
    }

    /// Current pipeline state
    pub fn state(&self) -> PipelineState {
        self.session.state()
    }

    /// Enter the Recording state. Fails when a run is already in flight.
    pub fn begin_recording(&mut self) -> Result<(), PipelineError> {
        self.session.start_recording()?;
        Ok(())
    }

    /// Abort a recording without processing
    pub fn cancel_recording(&mut self) -> Result<(), PipelineError> {
        self.session.cancel_recording()?;
        Ok(())
    }

    /// Finish a recording: format the transcript unless it is empty.
    /// An empty transcript skips formatting; that is not an error.
    pub async fn finish_recording(
        &mut self,
        transcript: &str,
        prompt: &SoapPrompt,
    ) -> Result<Option<FormatOutcome>, PipelineError> {
        if transcript.trim().is_empty() {
            self.session.cancel_recording()?;
            return Ok(None);
        }

        self.session.stop_recording()?;
        let outcome = self
            .formatter
            .format(&FormatRequest::new(prompt.clone(), transcript))
            .await;
        self.session.complete_processing()?;
        Ok(Some(outcome))
    }

    /// Ingest an audio file: transcribe, then format the transcript.
    /// Transcription failures return the pipeline to Idle.
    pub async fn ingest_file(
        &mut self,
        path: &Path,
        prompt: &SoapPrompt,
    ) -> Result<IngestOutcome, PipelineError> {
        self.session.begin_processing()?;

        let transcript = match self.files.transcribe(path).await {
            Ok(text) => text,
            Err(e) => {
                self.session.complete_processing()?;
                return Err(e.into());
            }
        };

        let note = if transcript.trim().is_empty() {
            None
        } else {
            Some(
                self.formatter
                    .format(&FormatRequest::new(prompt.clone(), transcript.as_str()))
                    .await,
            )
        };

        self.session.complete_processing()?;
        Ok(IngestOutcome { transcript, note })
    }

    /// Format already-captured transcript text outside a recording run
    pub async fn format_text(
        &mut self,
        transcript: &str,
        prompt: &SoapPrompt,
    ) -> Result<Option<FormatOutcome>, PipelineError> {
        if transcript.trim().is_empty() {
            return Ok(None);
        }

        self.session.begin_processing()?;
        let outcome = self
            .formatter
            .format(&FormatRequest::new(prompt.clone(), transcript))
            .await;
        self.session.complete_processing()?;
        Ok(Some(outcome))
    }
}
