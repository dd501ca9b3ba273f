//! Rule-based SOAP formatter
//!
//! Buckets a raw transcript into Subjective / Objective / Assessment / Plan
//! sections by substring and pattern matching. This is the guaranteed
//! fallback when no AI generator is configured: deterministic, total, and
//! explicitly not a semantic classifier. A span that satisfies several
//! patterns shows up in each matching section.

use lazy_static::lazy_static;
use regex::Regex;

use super::section::{NoteSection, SectionTag, StructuredNote};

lazy_static! {
    /// Quoted speech (both bracket styles) or an attributed patient
    /// statement. Alternatives are tried leftmost-first, so an attribution
    /// that contains a quote is captured as one span.
    static ref SUBJECTIVE_RE: Regex =
        Regex::new(r"「.*?」|『.*?』|患者[はが].*?(?:言った|述べた|話した)").unwrap();

    /// Measurements and vital-sign keywords: degrees, percentages, the two
    /// recognized clinical scales, and the fixed vital-sign terms.
    static ref OBJECTIVE_RE: Regex = Regex::new(
        r"\d+度|\d+\.?\d*[%％]|フェイススケール\d+|ブリストルスケール\d+型|バイタル|血圧|脈拍|SPO2|呼吸数"
    )
    .unwrap();
}

/// Keywords gating the assessment boilerplate
const ASSESSMENT_KEYWORDS: [&str; 3] = ["考えられる", "判断", "アセスメント"];

/// Keywords gating the plan boilerplate
const PLAN_KEYWORDS: [&str; 3] = ["今後", "計画", "予定"];

/// Constant sentence emitted for the A section; the matched text only
/// gates emission, it is not extracted.
const ASSESSMENT_NOTE: &str = "看護師の観察と評価に基づき、患者の状態を分析しました。";

/// Constant sentence emitted for the P section.
const PLAN_NOTE: &str = "今後のケアプランとして継続的な観察が必要です。";

/// Format a transcript into a structured SOAP note.
///
/// Sections are evaluated in fixed S, O, A, P order and each emits at most
/// one section. When nothing matches, the result degrades to a single
/// unclassified section wrapping the input verbatim.
pub fn format_soap(text: &str) -> StructuredNote {
    let mut sections = Vec::new();

    let subjective: Vec<&str> = SUBJECTIVE_RE.find_iter(text).map(|m| m.as_str()).collect();
    if !subjective.is_empty() {
        sections.push(NoteSection::new(
            SectionTag::Subjective,
            subjective.join("\n"),
        ));
    }

    let objective: Vec<&str> = OBJECTIVE_RE.find_iter(text).map(|m| m.as_str()).collect();
    if !objective.is_empty() {
        sections.push(NoteSection::new(SectionTag::Objective, objective.join(", ")));
    }

    if ASSESSMENT_KEYWORDS.iter().any(|k| text.contains(k)) {
        sections.push(NoteSection::new(SectionTag::Assessment, ASSESSMENT_NOTE));
    }

    if PLAN_KEYWORDS.iter().any(|k| text.contains(k)) {
        sections.push(NoteSection::new(SectionTag::Plan, PLAN_NOTE));
    }

    StructuredNote::from_sections(sections, text)
}
