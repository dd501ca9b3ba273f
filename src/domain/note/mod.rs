//! Structured note domain module

mod prompt;
mod section;
mod soap;

pub use prompt::{FormatRequest, SoapPrompt};
pub use section::{NoteSection, SectionTag, StructuredNote};
pub use soap::format_soap;
