//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// PushHerald - background push notification agent
#[derive(Parser, Debug)]
#[command(name = "push-herald")]
#[command(version)]
#[command(about = "Background push notification agent with window-aware click routing")]
#[command(long_about = None)]
pub struct Cli {
    /// Application name shown on notifications
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Icon used when a payload carries none
    #[arg(long, value_name = "ICON")]
    pub icon: Option<String>,

    /// Fixed badge resource attached to every notification
    #[arg(long, value_name = "BADGE")]
    pub badge: Option<String>,

    /// Url clicks fall back to when a notification carries none
    #[arg(long, value_name = "URL")]
    pub root_url: Option<String>,

    /// Path of the application's window-control socket
    #[arg(long, value_name = "PATH")]
    pub window_socket: Option<String>,

    /// Notification timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub notify_timeout_ms: Option<u32>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deliver a push to the running agent
    Send {
        /// Notification title
        #[arg(short, long)]
        title: Option<String>,

        /// Notification body
        #[arg(short, long)]
        body: Option<String>,

        /// Notification icon
        #[arg(long)]
        icon: Option<String>,

        /// Navigation target attached to the notification
        #[arg(short, long)]
        url: Option<String>,

        /// Raw payload sent as-is instead of the field flags
        #[arg(long, value_name = "JSON", conflicts_with_all = ["title", "body", "icon", "url"])]
        payload: Option<String>,

        /// Deliver a push event that carries no payload at all
        #[arg(long, conflicts_with_all = ["title", "body", "icon", "url", "payload"])]
        empty: bool,
    },
    /// Show status of the running agent
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
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
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "app_name",
    "default_icon",
    "badge",
    "root_url",
    "window_socket",
    "notify_timeout_ms",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["push-herald"]);
        assert!(cli.app_name.is_none());
        assert!(cli.icon.is_none());
        assert!(cli.badge.is_none());
        assert!(cli.root_url.is_none());
        assert!(cli.window_socket.is_none());
        assert!(cli.notify_timeout_ms.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_overrides() {
        let cli = Cli::parse_from([
            "push-herald",
            "--root-url",
            "/inbox",
            "--notify-timeout-ms",
            "3000",
        ]);
        assert_eq!(cli.root_url.as_deref(), Some("/inbox"));
        assert_eq!(cli.notify_timeout_ms, Some(3000));
    }

    #[test]
    fn send_accepts_field_flags() {
        let cli = Cli::parse_from(["push-herald", "send", "-t", "T", "-b", "B", "-u", "/x"]);
        match cli.command {
            Some(Commands::Send { title, body, url, .. }) => {
                assert_eq!(title.as_deref(), Some("T"));
                assert_eq!(body.as_deref(), Some("B"));
                assert_eq!(url.as_deref(), Some("/x"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn send_payload_conflicts_with_fields() {
        let result = Cli::try_parse_from([
            "push-herald",
            "send",
            "--payload",
            "{}",
            "--title",
            "T",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn valid_keys_are_recognized() {
        assert!(is_valid_config_key("root_url"));
        assert!(is_valid_config_key("notify_timeout_ms"));
        assert!(!is_valid_config_key("unknown"));
    }

    #[test]
    fn cli_structure_is_consistent() {
        Cli::command().debug_assert();
    }
}
