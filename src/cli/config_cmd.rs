//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
        ConfigAction::Clear => handle_clear(store, presenter).await,
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    match key {
        "api_key" => config.api_key = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "model" => config.model,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "api_key",
        &config
            .api_key
            .map(|s| mask_api_key(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("model", config.model.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

async fn handle_clear<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.clear().await?;
    presenter.success("Configuration cleared");
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "api_key" | "model" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must not be empty".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

/// Never echo the raw API key back
fn display_value(key: &str, value: &str) -> String {
    if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    }
}

/// Mask API key for display (show first 4 and last 4 chars).
/// Counts characters, not bytes, so multibyte keys never split mid-char.
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
