//! Agent app runner

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::application::dispatch::{AgentDispatcher, AgentEvent};
use crate::application::ports::ConfigStore;
use crate::application::NotificationAgent;
use crate::domain::config::AppConfig;
use crate::domain::notification::NotificationDefaults;
use crate::infrastructure::transport::ActiveFn;
use crate::infrastructure::{
    NotifyRustSurface, PushSocketServer, SocketPath, SocketWindowSurface, TracingFaultReporter,
    XdgConfigStore,
};

use super::pid_file::{PidFile, PidFileError};
use super::presenter::Presenter;
use super::signals::install_shutdown_signals;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Resolved options for running the agent
#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub app_name: String,
    pub defaults: NotificationDefaults,
    pub window_socket: PathBuf,
    pub notify_timeout_ms: u32,
}

impl AgentOptions {
    /// Build runner options from a merged config
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            app_name: config.app_name_or_default(),
            defaults: NotificationDefaults {
                icon: config.default_icon_or_default(),
                badge: config.badge_or_default(),
                root_url: config.root_url_or_default(),
            },
            window_socket: config
                .window_socket
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(SocketWindowSurface::default_path),
            notify_timeout_ms: config.notify_timeout_ms_or_default(),
        }
    }
}

/// Load config file and merge CLI overrides on top
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    file_config.merge(cli_config)
}

/// Run the agent in the foreground until shutdown
pub async fn run_agent(options: AgentOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Structured diagnostics for the long-lived process
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Acquire PID file
    let pid_file = PidFile::new();
    if let Err(e) = pid_file.acquire() {
        match e {
            PidFileError::AlreadyRunning(pid) => {
                presenter.error(&format!("Another agent is already running (PID: {})", pid));
            }
            _ => {
                presenter.error(&e.to_string());
            }
        }
        return ExitCode::from(EXIT_ERROR);
    }

    // Event channel shared by the delivery socket, the click wait, and signals
    let (events_tx, events_rx) = mpsc::channel::<AgentEvent>(32);

    // Create adapters
    let surface = NotifyRustSurface::new(
        options.app_name.clone(),
        options.notify_timeout_ms,
        events_tx.clone(),
    );
    let windows = SocketWindowSurface::new(options.window_socket.clone());
    let reporter = TracingFaultReporter::new();

    // Create the agent
    let agent = Arc::new(NotificationAgent::new(
        surface,
        windows,
        reporter,
        options.defaults.clone(),
    ));

    // Setup signal handlers
    if let Err(e) = install_shutdown_signals(events_tx.clone()).await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        let _ = pid_file.release();
        return ExitCode::from(EXIT_ERROR);
    }

    // Setup delivery socket server
    let socket_path = SocketPath::new();
    let mut server = PushSocketServer::new(socket_path.clone());
    if let Err(e) = server.bind() {
        presenter.error(&format!("Failed to bind delivery socket: {}", e));
        let _ = pid_file.release();
        return ExitCode::from(EXIT_ERROR);
    }

    let active: ActiveFn = {
        let agent = Arc::clone(&agent);
        Arc::new(move || agent.active_count())
    };

    // Spawn delivery server task (its Drop cleans up the socket file)
    let server_tx = events_tx.clone();
    tokio::spawn(async move {
        let _ = server.run(server_tx, active).await;
    });

    presenter.agent_status("Started, waiting for pushes...");
    presenter.info(&format!(
        "PID: {} | Delivery socket: {} | Window socket: {} | SIGINT: exit",
        std::process::id(),
        socket_path.path().display(),
        options.window_socket.display()
    ));

    // The runner keeps no sender of its own; events come from the spawned
    // transports and signal tasks
    drop(events_tx);

    // Dispatch events until shutdown
    AgentDispatcher::new(agent, events_rx).run().await;

    let _ = pid_file.release();
    ExitCode::from(EXIT_SUCCESS)
}
