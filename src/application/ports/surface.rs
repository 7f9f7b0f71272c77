//! Notification surface port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::NotificationContent;

/// Notification surface errors
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    #[error("Failed to show notification: {0}")]
    ShowFailed(String),

    #[error("Failed to dismiss notification: {0}")]
    DismissFailed(String),
}

/// Identifier assigned by the surface to one displayed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u32);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for the host notification surface.
///
/// The surface owns the displayed notification from `show` until the user
/// interacts with or dismisses it; the agent only holds the returned id.
#[async_trait]
pub trait NotificationSurface: Send + Sync {
    /// Show a notification with the given resolved content.
    ///
    /// Resolves once the host has scheduled the display.
    async fn show(&self, content: &NotificationContent) -> Result<NotificationId, SurfaceError>;

    /// Close a displayed notification.
    ///
    /// Must be idempotent: dismissing an unknown or already dismissed
    /// notification is Ok.
    async fn dismiss(&self, id: NotificationId) -> Result<(), SurfaceError>;
}

/// Blanket implementation for boxed surface types
#[async_trait]
impl NotificationSurface for Box<dyn NotificationSurface> {
    async fn show(&self, content: &NotificationContent) -> Result<NotificationId, SurfaceError> {
        self.as_ref().show(content).await
    }

    async fn dismiss(&self, id: NotificationId) -> Result<(), SurfaceError> {
        self.as_ref().dismiss(id).await
    }
}
