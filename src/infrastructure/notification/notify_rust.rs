//! Desktop notification adapter using notify-rust
//!
//! Shows notifications through the host notification service. On XDG
//! platforms each shown notification registers a default click action and
//! parks a blocking task on it; a click is fed back into the agent's event
//! channel together with the url that was attached at display time.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use notify_rust::Timeout;
use tokio::sync::{mpsc, oneshot};

use crate::application::dispatch::AgentEvent;
use crate::application::events::{ClickEvent, ClickedNotification, EventLifetime};
use crate::application::ports::{NotificationId, NotificationSurface, SurfaceError};
use crate::domain::notification::NotificationContent;

/// Desktop notification surface backed by notify-rust
pub struct NotifyRustSurface {
    /// Application name for notifications
    app_name: String,
    /// Timeout passed to the notification server, in milliseconds
    timeout_ms: u32,
    /// Channel clicks are delivered back on
    events: mpsc::Sender<AgentEvent>,
    /// Surface-assigned notification ids
    next_id: AtomicU32,
}

impl NotifyRustSurface {
    /// Create a new notify-rust surface delivering clicks to `events`
    pub fn new(
        app_name: impl Into<String>,
        timeout_ms: u32,
        events: mpsc::Sender<AgentEvent>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            timeout_ms,
            events,
            next_id: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl NotificationSurface for NotifyRustSurface {
    async fn show(&self, content: &NotificationContent) -> Result<NotificationId, SurfaceError> {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);

        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&self.app_name)
            .summary(&content.title)
            .body(&content.body)
            .icon(&content.icon)
            .timeout(Timeout::Milliseconds(self.timeout_ms));

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            notification.hint(notify_rust::Hint::Custom(
                "x-push-herald-badge".to_string(),
                content.badge.clone(),
            ));
            notification.action("default", "Open");
        }

        let url = content.url.clone();
        let events = self.events.clone();
        let (ready_tx, ready_rx) = oneshot::channel();

        // The handle must stay on the thread that created it, so the show
        // call and the click wait share one blocking task; the show outcome
        // is reported back as soon as the host has scheduled the display.
        tokio::task::spawn_blocking(move || {
            deliver(notification, id, url, events, ready_tx);
        });

        ready_rx
            .await
            .map_err(|e| SurfaceError::ShowFailed(format!("Task join error: {}", e)))?
            .map(|()| id)
    }

    /// XDG servers close a toast themselves when its action is invoked, and
    /// notify-rust exposes no close-by-id once a handle is parked in the
    /// action wait, so there is nothing left to close here. Unknown or
    /// already dismissed ids are Ok by contract.
    async fn dismiss(&self, _id: NotificationId) -> Result<(), SurfaceError> {
        Ok(())
    }
}

/// Show the notification, report the outcome, then wait for a click and
/// deliver it as an event. Blocks until the notification is gone and the
/// resulting click event, if any, has settled.
#[cfg(all(unix, not(target_os = "macos")))]
fn deliver(
    notification: notify_rust::Notification,
    id: NotificationId,
    url: String,
    events: mpsc::Sender<AgentEvent>,
    ready: oneshot::Sender<Result<(), SurfaceError>>,
) {
    let handle = match notification.show() {
        Ok(handle) => {
            let _ = ready.send(Ok(()));
            handle
        }
        Err(e) => {
            let _ = ready.send(Err(SurfaceError::ShowFailed(e.to_string())));
            return;
        }
    };

    handle.wait_for_action(|action| {
        // "__closed" arrives for dismissal without interaction
        if action == "default" {
            let (lifetime, completion) = EventLifetime::new();
            let click = AgentEvent::Click(ClickEvent {
                notification: ClickedNotification {
                    id,
                    url: Some(url),
                },
                lifetime,
            });
            if events.blocking_send(click).is_ok() {
                // hold the interaction pending until routing completes
                let _ = completion.blocking_settled();
            }
        }
    });
}

/// Show the notification and report the outcome. Click routing requires an
/// XDG notification server; other platforms only display.
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn deliver(
    notification: notify_rust::Notification,
    _id: NotificationId,
    _url: String,
    _events: mpsc::Sender<AgentEvent>,
    ready: oneshot::Sender<Result<(), SurfaceError>>,
) {
    let result = notification
        .show()
        .map(|_| ())
        .map_err(|e| SurfaceError::ShowFailed(e.to_string()));
    let _ = ready.send(result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_assigns_distinct_ids() {
        let (tx, _rx) = mpsc::channel(1);
        let surface = NotifyRustSurface::new("TestApp", 5_000, tx);
        let first = surface.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let second = surface.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        assert_ne!(first, second);
    }

    #[test]
    fn surface_keeps_app_name() {
        let (tx, _rx) = mpsc::channel(1);
        let surface = NotifyRustSurface::new("TestApp", 5_000, tx);
        assert_eq!(surface.app_name, "TestApp");
    }
}
