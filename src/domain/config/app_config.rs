//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub default_icon: Option<String>,
    pub badge: Option<String>,
    pub root_url: Option<String>,
    pub window_socket: Option<String>,
    pub notify_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some("PushHerald".to_string()),
            default_icon: Some("notification-message-im".to_string()),
            badge: Some("push-herald-badge".to_string()),
            root_url: Some("/".to_string()),
            window_socket: None,
            notify_timeout_ms: Some(10_000),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            default_icon: other.default_icon.or(self.default_icon),
            badge: other.badge.or(self.badge),
            root_url: other.root_url.or(self.root_url),
            window_socket: other.window_socket.or(self.window_socket),
            notify_timeout_ms: other.notify_timeout_ms.or(self.notify_timeout_ms),
        }
    }

    /// Get the notification app name, or the built-in default
    pub fn app_name_or_default(&self) -> String {
        self.app_name
            .clone()
            .unwrap_or_else(|| "PushHerald".to_string())
    }

    /// Get the default notification icon, or the built-in default
    pub fn default_icon_or_default(&self) -> String {
        self.default_icon
            .clone()
            .unwrap_or_else(|| "notification-message-im".to_string())
    }

    /// Get the badge resource, or the built-in default
    pub fn badge_or_default(&self) -> String {
        self.badge
            .clone()
            .unwrap_or_else(|| "push-herald-badge".to_string())
    }

    /// Get the root url clicks fall back to, or "/"
    pub fn root_url_or_default(&self) -> String {
        self.root_url.clone().unwrap_or_else(|| "/".to_string())
    }

    /// Get the notification timeout in milliseconds, or the built-in default
    pub fn notify_timeout_ms_or_default(&self) -> u32 {
        self.notify_timeout_ms.unwrap_or(10_000)
    }
}
