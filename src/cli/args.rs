//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SoapScribe - nursing dictation to SOAP-structured records
#[derive(Parser, Debug)]
#[command(name = "soap-scribe")]
#[command(version = "0.1.0")]
#[command(about = "Convert nursing dictation into SOAP-structured records using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format transcript text into a SOAP record
    Format {
        /// Text file to read (stdin when omitted)
        input: Option<PathBuf>,

        /// File containing a custom formatting prompt
        #[arg(short, long, value_name = "FILE")]
        prompt: Option<PathBuf>,
    },
    /// Transcribe an audio file and format the result
    Transcribe {
        /// Audio file (.mp3, .wav, .ogg, .webm, .mp4, .m4a, .flac)
        file: PathBuf,

        /// File containing a custom formatting prompt
        #[arg(short, long, value_name = "FILE")]
        prompt: Option<PathBuf>,
    },
    /// Capture dictation line by line until end of input or Ctrl+C
    Dictate {
        /// File containing a custom formatting prompt
        #[arg(short, long, value_name = "FILE")]
        prompt: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
    /// Remove the stored configuration
    Clear,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_format_from_stdin() {
        let cli = Cli::parse_from(["soap-scribe", "format"]);
        assert!(matches!(
            cli.command,
            Commands::Format {
                input: None,
                prompt: None
            }
        ));
    }

    #[test]
    fn cli_parses_format_with_input_file() {
        let cli = Cli::parse_from(["soap-scribe", "format", "notes.txt"]);
        if let Commands::Format { input, .. } = cli.command {
            assert_eq!(input, Some(PathBuf::from("notes.txt")));
        } else {
            panic!("Expected Format command");
        }
    }

    #[test]
    fn cli_parses_transcribe() {
        let cli = Cli::parse_from(["soap-scribe", "transcribe", "visit.mp3"]);
        if let Commands::Transcribe { file, prompt } = cli.command {
            assert_eq!(file, PathBuf::from("visit.mp3"));
            assert!(prompt.is_none());
        } else {
            panic!("Expected Transcribe command");
        }
    }

    #[test]
    fn cli_parses_prompt_option() {
        let cli = Cli::parse_from(["soap-scribe", "dictate", "--prompt", "custom.txt"]);
        if let Commands::Dictate { prompt } = cli.command {
            assert_eq!(prompt, Some(PathBuf::from("custom.txt")));
        } else {
            panic!("Expected Dictate command");
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["soap-scribe", "config", "set", "model", "gemini-test"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "model");
            assert_eq!(value, "gemini-test");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_parses_config_clear() {
        let cli = Cli::parse_from(["soap-scribe", "config", "clear"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Clear
            }
        ));
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("model"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
