//! Signal handling for the agent process

use colored::Colorize;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

use crate::application::dispatch::AgentEvent;

/// Install SIGINT/SIGTERM handlers that deliver a shutdown event.
///
/// The shutdown travels through the same event channel as pushes and clicks,
/// so in-flight handlers keep running while the dispatcher stops accepting
/// new events.
pub async fn install_shutdown_signals(
    events: mpsc::Sender<AgentEvent>,
) -> Result<(), std::io::Error> {
    let tx_int = events.clone();
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::spawn(async move {
        sigint.recv().await;
        eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
        let _ = tx_int.send(AgentEvent::Shutdown).await;
    });

    let tx_term = events;
    let mut sigterm = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        sigterm.recv().await;
        eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
        let _ = tx_term.send(AgentEvent::Shutdown).await;
    });

    Ok(())
}
