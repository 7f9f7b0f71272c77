//! Window control client over the application's unix socket
//!
//! The application exposes a JSON-lines control socket; one request and one
//! reply per connection. The client is stateless: every call takes a fresh
//! snapshot, so windows opened or closed between clicks are always seen.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use crate::application::ports::{WindowError, WindowSurface};
use crate::domain::routing::{WindowId, WindowRef};

/// Requests understood by the application's window-control socket
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum WindowRequest<'a> {
    List,
    Focus { id: u64 },
    Open { url: &'a str },
}

/// One window as reported by the application
#[derive(Debug, Deserialize)]
struct WindowEntry {
    id: u64,
    url: String,
}

/// Reply to a list request
#[derive(Debug, Deserialize)]
struct ListReply {
    windows: Vec<WindowEntry>,
}

/// Reply to a focus or open request
#[derive(Debug, Deserialize)]
struct AckReply {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl AckReply {
    fn detail(self) -> String {
        self.error.unwrap_or_else(|| "request refused".to_string())
    }
}

/// Window surface talking to the application's control socket
pub struct SocketWindowSurface {
    path: PathBuf,
}

impl SocketWindowSurface {
    /// Create a client for the given control socket path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default control socket path, preferring XDG_RUNTIME_DIR
    pub fn default_path() -> PathBuf {
        std::env::var("XDG_RUNTIME_DIR")
            .map(|dir| PathBuf::from(dir).join("push-herald-windows.sock"))
            .unwrap_or_else(|_| std::env::temp_dir().join("push-herald-windows.sock"))
    }

    /// Get the control socket path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Send one request and read one reply line
    async fn round_trip(&self, request: &WindowRequest<'_>) -> Result<String, WindowError> {
        let stream = UnixStream::connect(&self.path)
            .await
            .map_err(|e| WindowError::Unavailable(e.to_string()))?;
        let (reader, mut writer) = stream.into_split();

        let mut line =
            serde_json::to_string(request).map_err(|e| WindowError::Protocol(e.to_string()))?;
        line.push('\n');
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(|e| WindowError::Unavailable(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| WindowError::Unavailable(e.to_string()))?;

        let mut reader = BufReader::new(reader);
        let mut reply = String::new();
        reader
            .read_line(&mut reply)
            .await
            .map_err(|e| WindowError::Unavailable(e.to_string()))?;

        Ok(reply)
    }
}

#[async_trait]
impl WindowSurface for SocketWindowSurface {
    async fn match_all(&self) -> Result<Vec<WindowRef>, WindowError> {
        let reply = self.round_trip(&WindowRequest::List).await?;
        let list: ListReply =
            serde_json::from_str(&reply).map_err(|e| WindowError::Protocol(e.to_string()))?;

        Ok(list
            .windows
            .into_iter()
            .map(|entry| WindowRef {
                id: WindowId(entry.id),
                current_url: entry.url,
            })
            .collect())
    }

    async fn focus(&self, id: WindowId) -> Result<(), WindowError> {
        let reply = self.round_trip(&WindowRequest::Focus { id: id.0 }).await?;
        let ack: AckReply =
            serde_json::from_str(&reply).map_err(|e| WindowError::Protocol(e.to_string()))?;

        if ack.ok {
            Ok(())
        } else {
            Err(WindowError::FocusFailed {
                id,
                detail: ack.detail(),
            })
        }
    }

    async fn open_window(&self, url: &str) -> Result<(), WindowError> {
        let reply = self.round_trip(&WindowRequest::Open { url }).await?;
        let ack: AckReply =
            serde_json::from_str(&reply).map_err(|e| WindowError::Protocol(e.to_string()))?;

        if ack.ok {
            Ok(())
        } else {
            Err(WindowError::OpenFailed {
                url: url.to_string(),
                detail: ack.detail(),
            })
        }
    }
}
