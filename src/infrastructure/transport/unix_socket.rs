//! Unix domain socket transport for push delivery and agent control
//!
//! Line protocol, one request per connection:
//!   `push <bytes>` - deliver a push payload (the bytes are untrusted)
//!   `push`         - deliver a push event that carries no payload
//!   `status`       - report `running <n>` with the active notification count
//!
//! The reply to `push` is written only after the event's pending lifetime
//! settles, so the delivering party observes the same guarantee the agent
//! gives the host: the event outlives the asynchronous display step.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::mpsc;

use crate::application::dispatch::AgentEvent;
use crate::application::events::{EventLifetime, PushEvent};

/// Reports how many notifications are currently displayed
pub type ActiveFn = Arc<dyn Fn() -> usize + Send + Sync>;

/// Socket path resolver
#[derive(Debug, Clone)]
pub struct SocketPath {
    path: PathBuf,
}

impl SocketPath {
    /// Create socket path, preferring XDG_RUNTIME_DIR
    pub fn new() -> Self {
        let path = std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("push-herald.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("push-herald.sock"));
        Self { path }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if socket file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove socket file if it exists
    pub fn cleanup(&self) -> io::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for SocketPath {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery socket server - receives pushes and forwards them as events
pub struct PushSocketServer {
    socket_path: SocketPath,
    listener: Option<UnixListener>,
}

impl PushSocketServer {
    /// Create a new delivery server
    pub fn new(socket_path: SocketPath) -> Self {
        Self {
            socket_path,
            listener: None,
        }
    }

    /// Bind to the socket
    pub fn bind(&mut self) -> io::Result<()> {
        // Remove stale socket file if it exists
        self.socket_path.cleanup()?;

        let listener = UnixListener::bind(self.socket_path.path())?;
        self.listener = Some(listener);
        Ok(())
    }

    /// Get the socket path
    pub fn path(&self) -> &Path {
        self.socket_path.path()
    }

    /// Accept and handle connections.
    ///
    /// Each connection runs on its own task; a delivery that is waiting for
    /// its event to settle never blocks the accept loop.
    pub async fn run(&self, tx: mpsc::Sender<AgentEvent>, active: ActiveFn) -> io::Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "Socket not bound"))?;

        loop {
            match listener.accept().await {
                Ok((stream, _addr)) => {
                    let tx = tx.clone();
                    let active = Arc::clone(&active);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, tx, active).await {
                            tracing::warn!(error = %e, "delivery connection error");
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "delivery accept error");
                }
            }
        }
    }

    /// Cleanup socket file
    pub fn cleanup(&self) {
        let _ = self.socket_path.cleanup();
    }
}

impl Drop for PushSocketServer {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Handle a single delivery connection
async fn handle_connection(
    stream: UnixStream,
    tx: mpsc::Sender<AgentEvent>,
    active: ActiveFn,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    reader.read_line(&mut line).await?;
    let message = line.trim();

    let response = if message == "status" {
        format!("running {}\n", active())
    } else if message == "push" {
        deliver(&tx, None).await
    } else if let Some(raw) = message.strip_prefix("push ") {
        deliver(&tx, Some(raw.as_bytes().to_vec())).await
    } else {
        "error: unknown command\n".to_string()
    };

    writer.write_all(response.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Forward one push event and wait for its lifetime to settle
async fn deliver(tx: &mpsc::Sender<AgentEvent>, data: Option<Vec<u8>>) -> String {
    let (lifetime, completion) = EventLifetime::new();
    let event = AgentEvent::Push(PushEvent { data, lifetime });

    if tx.send(event).await.is_err() {
        return "error: agent not accepting events\n".to_string();
    }

    if completion.settled().await {
        "ok\n".to_string()
    } else {
        "error: event dropped\n".to_string()
    }
}

/// Delivery socket client - used by the CLI subcommands
pub struct PushSocketClient {
    socket_path: SocketPath,
}

impl PushSocketClient {
    /// Create a new delivery client
    pub fn new(socket_path: SocketPath) -> Self {
        Self { socket_path }
    }

    /// Check if an agent appears to be running (socket exists)
    pub fn is_agent_running(&self) -> bool {
        self.socket_path.exists()
    }

    /// Deliver a push payload, or an empty push event when `payload` is None.
    ///
    /// The payload travels as one protocol line; serialized JSON never
    /// contains raw newlines, so nothing is lost in transit.
    pub async fn send_push(&self, payload: Option<&str>) -> io::Result<String> {
        match payload {
            Some(raw) => self.send_line(&format!("push {}", raw)).await,
            None => self.send_line("push").await,
        }
    }

    /// Query the running agent's status
    pub async fn status(&self) -> io::Result<String> {
        self.send_line("status").await
    }

    /// Send one protocol line and read the reply
    async fn send_line(&self, message: &str) -> io::Result<String> {
        let stream = UnixStream::connect(self.socket_path.path()).await?;
        let (reader, mut writer) = stream.into_split();

        writer.write_all(format!("{}\n", message).as_bytes()).await?;
        writer.flush().await?;

        let mut reader = BufReader::new(reader);
        let mut response = String::new();
        reader.read_line(&mut response).await?;

        Ok(response)
    }
}
