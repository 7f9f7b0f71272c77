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
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
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

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "default_icon" => config.default_icon = Some(value.to_string()),
        "badge" => config.badge = Some(value.to_string()),
        "root_url" => config.root_url = Some(value.to_string()),
        "window_socket" => config.window_socket = Some(value.to_string()),
        "notify_timeout_ms" => {
            config.notify_timeout_ms =
                Some(value.parse().map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a number of milliseconds".to_string(),
                })?)
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "app_name" => config.app_name,
        "default_icon" => config.default_icon,
        "badge" => config.badge,
        "root_url" => config.root_url,
        "window_socket" => config.window_socket,
        "notify_timeout_ms" => config.notify_timeout_ms.map(|ms| ms.to_string()),
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
        "app_name",
        config.app_name.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "default_icon",
        config.default_icon.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value("badge", config.badge.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "root_url",
        config.root_url.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "window_socket",
        config.window_socket.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "notify_timeout_ms",
        &config
            .notify_timeout_ms
            .map(|ms| ms.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "notify_timeout_ms" => {
            value
                .parse::<u32>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a number of milliseconds".to_string(),
                })?;
        }
        "root_url" => {
            if value.is_empty() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_must_be_numeric() {
        assert!(validate_config_value("notify_timeout_ms", "5000").is_ok());
        assert!(validate_config_value("notify_timeout_ms", "soon").is_err());
    }

    #[test]
    fn root_url_must_not_be_empty() {
        assert!(validate_config_value("root_url", "/").is_ok());
        assert!(validate_config_value("root_url", "").is_err());
    }
}
