//! Structured note value objects

use std::fmt;

/// Closed set of SOAP section tags, plus the degraded unclassified form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Subjective,
    Objective,
    Assessment,
    Plan,
    Unclassified,
}

impl SectionTag {
    /// Get the single-letter tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Subjective => "S",
            Self::Objective => "O",
            Self::Assessment => "A",
            Self::Plan => "P",
            Self::Unclassified => "-",
        }
    }

    /// Get the section header label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Subjective => "S: 主観的データ",
            Self::Objective => "O: 客観的データ",
            Self::Assessment => "A: アセスメント",
            Self::Plan => "P: 計画",
            Self::Unclassified => "SOAP形式の看護記録",
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One labeled section of a structured note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSection {
    pub tag: SectionTag,
    pub body: String,
}

impl NoteSection {
    pub fn new(tag: SectionTag, body: impl Into<String>) -> Self {
        Self {
            tag,
            body: body.into(),
        }
    }
}

/// Caveat appended to the degraded note when no section matched.
const INSUFFICIENT_NOTICE: &str =
    "※このテキストからSOAP形式に変換できる情報が十分ではありませんでした。より詳細な情報を入力してください。";

/// Ordered sequence of note sections. Always holds at least one section:
/// when nothing matched, a single unclassified section wraps the original
/// transcript verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredNote {
    sections: Vec<NoteSection>,
}

impl StructuredNote {
    /// Build a note from matched sections. Empty input degrades to the
    /// unclassified fallback wrapping `original`.
    pub fn from_sections(sections: Vec<NoteSection>, original: &str) -> Self {
        if sections.is_empty() {
            return Self::fallback(original);
        }
        Self { sections }
    }

    /// Build the degraded single-section note
    pub fn fallback(original: &str) -> Self {
        Self {
            sections: vec![NoteSection::new(SectionTag::Unclassified, original)],
        }
    }

    /// Get the sections in emission order
    pub fn sections(&self) -> &[NoteSection] {
        &self.sections
    }

    /// Whether this is the degraded unclassified note
    pub fn is_fallback(&self) -> bool {
        matches!(
            self.sections.as_slice(),
            [NoteSection {
                tag: SectionTag::Unclassified,
                ..
            }]
        )
    }

    /// Render to display text: `【label】` headers, sections separated by a
    /// blank line. The fallback form carries the insufficient-information
    /// caveat after the verbatim transcript.
    pub fn render(&self) -> String {
        if let [section] = self.sections.as_slice() {
            if section.tag == SectionTag::Unclassified {
                return format!(
                    "【{}】\n\n{}\n\n{}",
                    section.tag.label(),
                    section.body,
                    INSUFFICIENT_NOTICE
                );
            }
        }

        self.sections
            .iter()
            .map(|s| format!("【{}】\n{}", s.tag.label(), s.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for StructuredNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
