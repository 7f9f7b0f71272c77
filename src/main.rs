//! PushHerald CLI entry point

use std::process::ExitCode;

use clap::Parser;

use push_herald::cli::{
    app::{load_merged_config, run_agent, AgentOptions, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    handle_send_command, handle_status_command,
    presenter::Presenter,
    SendFields, SendRequest,
};
use push_herald::domain::config::AppConfig;
use push_herald::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Send {
            title,
            body,
            icon,
            url,
            payload,
            empty,
        }) => {
            let request = if empty {
                SendRequest::Empty
            } else if let Some(raw) = payload {
                SendRequest::Raw(raw)
            } else {
                match (title, body) {
                    (Some(title), Some(body)) => SendRequest::Fields(SendFields {
                        title,
                        body,
                        icon,
                        url,
                    }),
                    _ => {
                        presenter
                            .error("send requires --title and --body (or --payload / --empty)");
                        return ExitCode::from(EXIT_USAGE_ERROR);
                    }
                }
            };

            if let Err(e) = handle_send_command(request, &presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Status) => {
            if let Err(e) = handle_status_command(&presenter).await {
                presenter.error(&e);
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        None => {}
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        app_name: cli.app_name,
        default_icon: cli.icon,
        badge: cli.badge,
        root_url: cli.root_url,
        window_socket: cli.window_socket,
        notify_timeout_ms: cli.notify_timeout_ms,
    };

    // Merge config and run the agent
    let config = load_merged_config(cli_config).await;
    run_agent(AgentOptions::from_config(&config)).await
}
