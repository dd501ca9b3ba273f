//! File transcription use case
//!
//! One `transcribe` operation covering both paths: a multimodal generator
//! call when the AI adapter is wired, and a deterministic placeholder
//! transcript otherwise. Callers never need to know which path ran.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::fs;

use crate::domain::audio::{AudioData, AudioMimeType};

use super::ports::{GenerationError, NoteGenerator};

/// Fixed instruction for the multimodal transcription request
const TRANSCRIBE_INSTRUCTION: &str =
    "この音声は看護師の病棟での会話記録です。内容を省略せず、そのまま日本語で文字起こししてください。";

/// Artificial latency of the placeholder path
const MOCK_DELAY: Duration = Duration::from_millis(1500);

/// File transcription errors
#[derive(Debug, Error)]
pub enum FileTranscribeError {
    #[error("Not an audio file: {0}")]
    UnsupportedFile(String),

    #[error("Failed to read audio file: {0}")]
    FileRead(String),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] GenerationError),
}

/// File transcription use case
pub struct FileTranscriber {
    generator: Option<Arc<dyn NoteGenerator>>,
    mock_delay: Duration,
}

impl FileTranscriber {
    /// Create a transcriber with an optional AI generator
    pub fn new(generator: Option<Arc<dyn NoteGenerator>>) -> Self {
        Self {
            generator,
            mock_delay: MOCK_DELAY,
        }
    }

    /// Override the placeholder-path delay (tests)
    pub fn with_mock_delay(mut self, delay: Duration) -> Self {
        self.mock_delay = delay;
        self
    }

    /// Transcribe an audio file to text.
    ///
    /// Rejects non-audio files up front. With a generator wired the audio
    /// is sent as a multimodal request; otherwise a deterministic
    /// placeholder transcript is produced after a fixed delay.
    pub async fn transcribe(&self, path: &Path) -> Result<String, FileTranscribeError> {
        let mime_type = AudioMimeType::from_path(path)
            .ok_or_else(|| FileTranscribeError::UnsupportedFile(path.display().to_string()))?;

        match self.transcribe_with_generator(path, mime_type).await {
            Ok(text) => Ok(text),
            Err(FileTranscribeError::Transcription(GenerationError::NotConfigured)) => {
                self.mock_transcribe(path).await
            }
            Err(e) => Err(e),
        }
    }

    /// AI path: read the file and issue a multimodal request
    async fn transcribe_with_generator(
        &self,
        path: &Path,
        mime_type: AudioMimeType,
    ) -> Result<String, FileTranscribeError> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(GenerationError::NotConfigured)?;

        let bytes = fs::read(path)
            .await
            .map_err(|e| FileTranscribeError::FileRead(e.to_string()))?;
        let audio = AudioData::new(bytes, mime_type);

        let text = generator
            .transcribe_audio(TRANSCRIBE_INSTRUCTION, &audio)
            .await?;
        Ok(text)
    }

    /// Placeholder path: deterministic transcript derived from the file
    /// stem, after an artificial processing delay
    async fn mock_transcribe(&self, path: &Path) -> Result<String, FileTranscribeError> {
        // Read to prove the file exists and is readable
        fs::read(path)
            .await
            .map_err(|e| FileTranscribeError::FileRead(e.to_string()))?;

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        tokio::time::sleep(self.mock_delay).await;

        Ok(format!(
            r#"ファイル「{stem}」からの文字起こし結果:

患者の〇〇さんを訪室しました。
バイタルは血圧が132/85、脈拍78、体温36.5度でした。
患者は「今日は調子が良いです」と話されていました。
SpO2は98%で安定しています。
ブリストルスケールは4型でした。
痛みについてはフェイススケール2程度と言われています。
昨日よりも歩行距離が伸びていることを確認しました。
明日からリハビリの頻度を増やす計画です。

※これはプロトタイプ用の模擬文字起こしです。実際の実装では適切なAPIを使用します。"#
        ))
    }
}
