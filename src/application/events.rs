//! Event types delivered to the agent
//!
//! Each inbound event carries an `EventLifetime`: the delivering party holds
//! the matching `EventCompletion` and can await it, so the event stays
//! pending until the handler's asynchronous work (display, or the
//! enumerate/focus/open sequence) has finished. Dropping the lifetime also
//! unblocks the deliverer, so a failed handler cannot leave it waiting.

use tokio::sync::oneshot;

use super::ports::NotificationId;

/// Pending-lifetime handle held by an event handler.
/// Settles explicitly via [`EventLifetime::settle`]; dropping it unsettled
/// still releases the waiting deliverer.
#[derive(Debug)]
pub struct EventLifetime {
    tx: Option<oneshot::Sender<()>>,
}

impl EventLifetime {
    /// Create a lifetime together with the completion its deliverer awaits
    pub fn new() -> (Self, EventCompletion) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, EventCompletion { rx })
    }

    /// Create a lifetime nobody is waiting on
    pub fn detached() -> Self {
        Self { tx: None }
    }

    /// Mark the event's handling as complete
    pub fn settle(self) {
        if let Some(tx) = self.tx {
            let _ = tx.send(());
        }
    }
}

/// Awaitable completion of one event's handling
#[derive(Debug)]
pub struct EventCompletion {
    rx: oneshot::Receiver<()>,
}

impl EventCompletion {
    /// Wait until the event settles.
    ///
    /// Returns false if the event was dropped without ever being handled
    /// (e.g. the dispatcher shut down first).
    pub async fn settled(self) -> bool {
        self.rx.await.is_ok()
    }

    /// Blocking variant for non-async contexts (e.g. a blocking click wait)
    pub fn blocking_settled(self) -> bool {
        self.rx.blocking_recv().is_ok()
    }
}

/// An inbound push event. The payload may be absent or malformed.
#[derive(Debug)]
pub struct PushEvent {
    pub data: Option<Vec<u8>>,
    pub lifetime: EventLifetime,
}

/// The notification the user acted on, as reported by the surface.
/// Carries only the attached url resolved at display time.
#[derive(Debug, Clone)]
pub struct ClickedNotification {
    pub id: NotificationId,
    pub url: Option<String>,
}

/// An inbound notification-interaction event
#[derive(Debug)]
pub struct ClickEvent {
    pub notification: ClickedNotification,
    pub lifetime: EventLifetime,
}
