//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the main application runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{run_dictate, run_format, run_transcribe, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
