//! Main app runners for the format/transcribe/dictate commands

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::AsyncReadExt;

use crate::application::ports::{ConfigStore, NoteGenerator};
use crate::application::{
    FileTranscriber, FormatNoteUseCase, FormatOutcome, NotePipeline, SessionEvent,
    TranscriptionSession,
};
use crate::domain::config::AppConfig;
use crate::domain::note::SoapPrompt;
use crate::infrastructure::{GeminiClient, LineInputRecognizer, SessionConfigStore};

use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file and environment
pub async fn load_merged_config<S: ConfigStore>(store: &S) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        model: env::var("SOAP_SCRIBE_MODEL").ok().filter(|s| !s.is_empty()),
    };

    // Merge: defaults < file < env
    AppConfig::defaults().merge(file_config).merge(env_config)
}

/// Build the AI generator when an API key is configured. Without one the
/// rule-based formatter and the placeholder transcription path take over.
fn build_generator(config: &AppConfig, presenter: &Presenter) -> Option<Arc<dyn NoteGenerator>> {
    let ai_config = config.ai_config()?;
    match GeminiClient::new(ai_config) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            presenter.warn(&format!("AI unavailable, using rule-based formatting: {}", e));
            None
        }
    }
}

/// Assemble the pipeline from merged configuration
async fn build_pipeline(presenter: &Presenter) -> NotePipeline {
    let store = SessionConfigStore::new();
    let config = load_merged_config(&store).await;
    let generator = build_generator(&config, presenter);

    NotePipeline::new(
        FormatNoteUseCase::new(generator.clone()),
        FileTranscriber::new(generator),
    )
}

/// Read the prompt override file, or fall back to the built-in prompt
async fn load_prompt(path: Option<&Path>) -> Result<SoapPrompt, String> {
    match path {
        Some(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| format!("Failed to read prompt file {}: {}", path.display(), e))?;
            if content.trim().is_empty() {
                return Err(format!("Prompt file {} is empty", path.display()));
            }
            Ok(SoapPrompt::custom(content))
        }
        None => Ok(SoapPrompt::default()),
    }
}

fn report_outcome(outcome: &FormatOutcome, presenter: &Presenter) {
    if let Some(ref reason) = outcome.fallback_reason {
        presenter.warn(&format!(
            "AI formatting failed, used rule-based fallback: {}",
            reason
        ));
    }
    presenter.output(&outcome.text);
}

/// Run the format command: transcript text in, SOAP record out
pub async fn run_format(input: Option<PathBuf>, prompt_path: Option<PathBuf>) -> ExitCode {
    let presenter = Presenter::new();

    let prompt = match load_prompt(prompt_path.as_deref()).await {
        Ok(prompt) => prompt,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let text = match read_input(input.as_deref()).await {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut pipeline = build_pipeline(&presenter).await;
    match pipeline.format_text(&text, &prompt).await {
        Ok(Some(outcome)) => {
            report_outcome(&outcome, &presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(None) => {
            presenter.warn("No text to format");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the transcribe command: audio file in, transcript and SOAP record out
pub async fn run_transcribe(file: PathBuf, prompt_path: Option<PathBuf>) -> ExitCode {
    let mut presenter = Presenter::new();

    let prompt = match load_prompt(prompt_path.as_deref()).await {
        Ok(prompt) => prompt,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let mut pipeline = build_pipeline(&presenter).await;

    presenter.start_spinner("Transcribing audio...");
    let outcome = match pipeline.ingest_file(&file, &prompt).await {
        Ok(outcome) => outcome,
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    presenter.spinner_success("Transcription complete");

    presenter.output(&outcome.transcript);
    match outcome.note {
        Some(note) => {
            presenter.output("");
            report_outcome(&note, &presenter);
        }
        None => presenter.warn("Transcript was empty; no record produced"),
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the dictate command: capture lines until end of input or Ctrl+C,
/// then format the accumulated transcript
pub async fn run_dictate(prompt_path: Option<PathBuf>) -> ExitCode {
    let mut presenter = Presenter::new();

    let prompt = match load_prompt(prompt_path.as_deref()).await {
        Ok(prompt) => prompt,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup() {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let mut session = TranscriptionSession::new(LineInputRecognizer::new());
    if !session.is_available() {
        presenter.error("Dictation is not available in this environment");
        return ExitCode::from(EXIT_ERROR);
    }

    let mut pipeline = build_pipeline(&presenter).await;

    if let Err(e) = session.start().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }
    if let Err(e) = pipeline.begin_recording() {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.start_spinner("Listening... (Ctrl+C to finish)");

    loop {
        tokio::select! {
            event = session.next_event() => match event {
                Some(SessionEvent::Update(text)) => {
                    presenter.update_spinner(&format!("Listening: {}", text));
                }
                Some(SessionEvent::Stalled) | None => break,
                Some(SessionEvent::Failed(message)) => {
                    presenter.stop_spinner();
                    presenter.error(&format!("Dictation failed: {}", message));
                    break;
                }
            },
            _ = shutdown.wait() => break,
        }
    }

    let transcript = session.stop().await;
    presenter.stop_spinner();

    // An empty transcript cancels the recording instead of formatting.
    match pipeline.finish_recording(&transcript, &prompt).await {
        Ok(Some(outcome)) => {
            report_outcome(&outcome, &presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(None) => {
            presenter.warn("No dictation captured");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Read transcript text from a file, or stdin when no file was given
async fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(text)
        }
    }
}
