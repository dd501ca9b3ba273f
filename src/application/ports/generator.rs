//! Generative-AI port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioData;

/// Generation errors
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("AI service is not configured")]
    NotConfigured,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the generative-AI completion endpoint.
///
/// Covers the two request shapes the pipeline needs: a text-only
/// completion (note formatting) and a multimodal text+audio completion
/// (file transcription).
#[async_trait]
pub trait NoteGenerator: Send + Sync {
    /// Run a text-only completion.
    ///
    /// # Arguments
    /// * `prompt` - The formatting instruction
    /// * `input` - The transcript text to reformat
    ///
    /// # Returns
    /// The model's text output, verbatim
    async fn generate_text(&self, prompt: &str, input: &str) -> Result<String, GenerationError>;

    /// Run a multimodal completion bundling an instruction and audio.
    ///
    /// # Arguments
    /// * `instruction` - The transcription instruction
    /// * `audio` - The audio payload (base64-encoded on the wire)
    async fn transcribe_audio(
        &self,
        instruction: &str,
        audio: &AudioData,
    ) -> Result<String, GenerationError>;
}
