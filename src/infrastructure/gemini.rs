//! Gemini API generator adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, NoteGenerator};
use crate::domain::audio::AudioData;
use crate::domain::config::AiServiceConfig;
use crate::domain::error::ConfigError;

/// Gemini API base URL
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Request types for Gemini API

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: impl Into<String>, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// Response types for Gemini API

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[allow(dead_code)]
    status: Option<String>,
    #[allow(dead_code)]
    code: Option<i32>,
}

/// Gemini API generator.
///
/// Construction is the explicit, observable configuration step: it fails
/// on an invalid config and performs no I/O. The same client serves both
/// text-only and multimodal requests.
pub struct GeminiClient {
    config: AiServiceConfig,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client from a validated configuration
    pub fn new(config: AiServiceConfig) -> Result<Self, ConfigError> {
        // Re-validate: configs can be constructed field-wise elsewhere
        let config = AiServiceConfig::new(config.api_key, config.model)?;
        Ok(Self {
            config,
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// Override the API base URL (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the configured model identifier
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.config.model, self.config.api_key
        )
    }

    /// Build a single-user-turn request from parts
    fn build_request(parts: Vec<Part>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        }
    }

    /// Extract text from response
    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Send a generateContent request and return the response text
    async fn generate(&self, body: GenerateContentRequest) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.api_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenerationError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::ParseError(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(GenerationError::ApiError(error.message));
        }

        let text = Self::extract_text(&response).ok_or(GenerationError::EmptyResponse)?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl NoteGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str, input: &str) -> Result<String, GenerationError> {
        let full_prompt = format!("{}\n\n入力データ:\n{}", prompt, input);
        let body = Self::build_request(vec![Part::text(full_prompt)]);
        self.generate(body).await
    }

    async fn transcribe_audio(
        &self,
        instruction: &str,
        audio: &AudioData,
    ) -> Result<String, GenerationError> {
        let body = Self::build_request(vec![
            Part::text(instruction),
            Part::inline_data(audio.mime_type().to_string(), audio.to_base64()),
        ]);
        self.generate(body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::AudioMimeType;

    fn client() -> GeminiClient {
        GeminiClient::new(AiServiceConfig::new("test-key", "test-model").unwrap()).unwrap()
    }

    #[test]
    fn new_rejects_blank_config() {
        let config = AiServiceConfig {
            api_key: "".to_string(),
            model: "m".to_string(),
        };
        assert!(GeminiClient::new(config).is_err());
    }

    #[test]
    fn api_url_contains_model_and_key() {
        let url = client().api_url();
        assert!(url.contains("test-model"));
        assert!(url.contains("test-key"));
        assert!(url.contains("generateContent"));
    }

    #[test]
    fn base_url_is_overridable() {
        let client = client().with_base_url("http://localhost:9000");
        assert!(client.api_url().starts_with("http://localhost:9000/"));
    }

    #[test]
    fn text_request_has_single_text_part() {
        let body = GeminiClient::build_request(vec![Part::text("prompt")]);
        assert_eq!(body.contents.len(), 1);
        assert_eq!(body.contents[0].role, "user");
        assert_eq!(body.contents[0].parts[0].text.as_deref(), Some("prompt"));
        assert!(body.contents[0].parts[0].inline_data.is_none());
    }

    #[test]
    fn multimodal_request_has_text_and_inline_data() {
        let audio = AudioData::new(vec![1, 2, 3], AudioMimeType::Mpeg);
        let body = GeminiClient::build_request(vec![
            Part::text("instruction"),
            Part::inline_data(audio.mime_type().to_string(), audio.to_base64()),
        ]);

        let parts = &body.contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert!(parts[0].text.is_some());
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "audio/mpeg");
        assert!(!inline.data.is_empty());
    }

    #[test]
    fn inline_data_serializes_camel_case() {
        let body = GeminiClient::build_request(vec![Part::inline_data("audio/wav", "AAAA".into())]);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("inlineData"));
        assert!(json.contains("mimeType"));
        assert!(!json.contains("\"text\""));
    }

    #[test]
    fn extract_text_from_response() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![ResponsePart {
                        text: Some("Hello world".to_string()),
                    }]),
                }),
            }]),
            error: None,
        };

        let text = GeminiClient::extract_text(&response);
        assert_eq!(text, Some("Hello world".to_string()));
    }

    #[test]
    fn extract_text_empty_response() {
        let response = GenerateContentResponse {
            candidates: None,
            error: None,
        };

        assert!(GeminiClient::extract_text(&response).is_none());
    }
}
