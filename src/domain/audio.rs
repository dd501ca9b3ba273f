//! Audio payload value object

use std::fmt;
use std::path::Path;

/// Supported audio MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Ogg,
    Mp3,
    Mpeg,
    Wav,
    Webm,
    Mp4,
    Flac,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Mp4 => "audio/mp4",
            Self::Flac => "audio/flac",
        }
    }

    /// Map a file extension to a MIME type. Unknown extensions return None;
    /// non-audio files are rejected at that point.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ogg" => Some(Self::Ogg),
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "webm" => Some(Self::Webm),
            "mp4" | "m4a" => Some(Self::Mp4),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    /// Map a file path to a MIME type via its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Mpeg
    }
}

/// Audio bytes ready for a multimodal request, tagged with a MIME type.
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Create AudioData from an already-encoded data URL
    /// (`data:audio/...;base64,<payload>`), stripping the prefix.
    pub fn from_data_url(url: &str, mime_type: AudioMimeType) -> Option<Self> {
        use base64::Engine;
        let payload = url.split_once(',')?.1;
        let data = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()?;
        Some(Self { data, mime_type })
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Encode the audio data as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
