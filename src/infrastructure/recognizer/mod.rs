//! Speech input adapters

pub mod line_input;

pub use line_input::LineInputRecognizer;
