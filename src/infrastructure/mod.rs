//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the application ports: the Gemini API
//! client, the session configuration store, and the line-based speech
//! input adapter.

pub mod config;
pub mod gemini;
pub mod recognizer;

pub use config::SessionConfigStore;
pub use gemini::GeminiClient;
pub use recognizer::LineInputRecognizer;
