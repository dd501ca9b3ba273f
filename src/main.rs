//! SoapScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use soap_scribe::cli::{
    app::{run_dictate, run_format, run_transcribe, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use soap_scribe::domain::error::ConfigError;
use soap_scribe::infrastructure::SessionConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format { input, prompt } => run_format(input, prompt).await,
        Commands::Transcribe { file, prompt } => run_transcribe(file, prompt).await,
        Commands::Dictate { prompt } => run_dictate(prompt).await,
        Commands::Config { action } => {
            let presenter = Presenter::new();
            let store = SessionConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                let code = match e {
                    ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
                    _ => EXIT_ERROR,
                };
                return ExitCode::from(code);
            }
            ExitCode::SUCCESS
        }
    }
}
