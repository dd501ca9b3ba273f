//! Transcript accumulator value object

/// Append-only finalized transcript text plus a transient interim tail.
///
/// Finalized text is never revised once appended; the interim tail is
/// replaced wholesale on every update and is only ever used for display.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    finalized: String,
    interim: String,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized fragment, followed by a separating space
    pub fn push_final(&mut self, fragment: &str) {
        self.finalized.push_str(fragment);
        self.finalized.push(' ');
    }

    /// Replace the interim tail
    pub fn set_interim(&mut self, interim: impl Into<String>) {
        self.interim = interim.into();
    }

    /// Drop the interim tail
    pub fn clear_interim(&mut self) {
        self.interim.clear();
    }

    /// Finalized text only; what a stopped session returns
    pub fn finalized(&self) -> &str {
        &self.finalized
    }

    /// Finalized text with the current interim tail, for live display
    pub fn display_text(&self) -> String {
        format!("{}{}", self.finalized, self.interim)
    }

    /// Whether any finalized text has accumulated
    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }

    /// Clear everything
    pub fn clear(&mut self) {
        self.finalized.clear();
        self.interim.clear();
    }
}
