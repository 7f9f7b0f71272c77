//! Window surface port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::routing::{WindowId, WindowRef};

/// Window surface errors
#[derive(Debug, Clone, Error)]
pub enum WindowError {
    #[error("Window surface unavailable: {0}")]
    Unavailable(String),

    #[error("Window surface protocol error: {0}")]
    Protocol(String),

    #[error("Failed to focus window {id}: {detail}")]
    FocusFailed { id: WindowId, detail: String },

    #[error("Failed to open window at {url}: {detail}")]
    OpenFailed { url: String, detail: String },
}

/// Port for the host window-management surface.
///
/// Read-only from the agent's perspective: enumerate, focus, and open are the
/// only permitted operations. The agent never closes or mutates window state.
#[async_trait]
pub trait WindowSurface: Send + Sync {
    /// Snapshot all currently open application windows, including ones the
    /// agent has not been managing since its own startup.
    ///
    /// The snapshot is only valid for the scope of one click; callers must
    /// not cache it across events.
    async fn match_all(&self) -> Result<Vec<WindowRef>, WindowError>;

    /// Bring an open window to focus
    async fn focus(&self, id: WindowId) -> Result<(), WindowError>;

    /// Open a new application window navigated to the given url
    async fn open_window(&self, url: &str) -> Result<(), WindowError>;
}

/// Blanket implementation for boxed window surface types
#[async_trait]
impl WindowSurface for Box<dyn WindowSurface> {
    async fn match_all(&self) -> Result<Vec<WindowRef>, WindowError> {
        self.as_ref().match_all().await
    }

    async fn focus(&self, id: WindowId) -> Result<(), WindowError> {
        self.as_ref().focus(id).await
    }

    async fn open_window(&self, url: &str) -> Result<(), WindowError> {
        self.as_ref().open_window(url).await
    }
}
