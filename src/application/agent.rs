//! Notification agent use case
//!
//! The agent converts inbound push payloads into displayed notifications and
//! notification clicks into navigation actions against the open application
//! windows. All host capabilities are injected; the agent holds no state
//! beyond its record of displayed notifications.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::notification::{
    NotificationContent, NotificationDefaults, NotificationLifecycle,
};
use crate::domain::push::PushPayload;
use crate::domain::routing::{route_click, Route};

use super::events::{ClickEvent, PushEvent};
use super::ports::{Fault, FaultReporter, NotificationId, NotificationSurface, WindowSurface};

/// One displayed notification the agent is tracking
#[derive(Debug)]
struct NotificationRecord {
    url: String,
    lifecycle: NotificationLifecycle,
}

/// Notification agent use case.
///
/// Event handlers never return errors: every failure is reported through the
/// fault sink, and the worst user-visible outcome is that no notification
/// appears.
pub struct NotificationAgent<S, W, F>
where
    S: NotificationSurface,
    W: WindowSurface,
    F: FaultReporter,
{
    surface: S,
    windows: W,
    reporter: F,
    defaults: NotificationDefaults,
    // std Mutex: locked only for brief map updates, never across an await
    records: Mutex<HashMap<NotificationId, NotificationRecord>>,
}

impl<S, W, F> NotificationAgent<S, W, F>
where
    S: NotificationSurface,
    W: WindowSurface,
    F: FaultReporter,
{
    /// Create a new agent with injected host capabilities
    pub fn new(surface: S, windows: W, reporter: F, defaults: NotificationDefaults) -> Self {
        Self {
            surface,
            windows,
            reporter,
            defaults,
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Number of notifications currently displayed and not yet dismissed
    pub fn active_count(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Handle one inbound push event.
    ///
    /// A missing payload is an expected no-op; a malformed payload is caught
    /// and reported. On success exactly one notification is shown. The event
    /// lifetime stays pending until the display step has completed.
    pub async fn handle_push(&self, event: PushEvent) {
        let PushEvent { data, lifetime } = event;

        let Some(bytes) = data else {
            self.reporter.report(&Fault::MissingPayload);
            lifetime.settle();
            return;
        };

        let payload = match PushPayload::parse(&bytes) {
            Ok(payload) => payload,
            Err(e) => {
                self.reporter.report(&Fault::MalformedPayload {
                    detail: e.to_string(),
                });
                lifetime.settle();
                return;
            }
        };

        let content = NotificationContent::from_payload(payload, &self.defaults);
        let mut lifecycle = NotificationLifecycle::new();

        match self.surface.show(&content).await {
            Ok(id) => {
                if lifecycle.mark_displayed().is_ok() {
                    let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
                    records.insert(
                        id,
                        NotificationRecord {
                            url: content.url,
                            lifecycle,
                        },
                    );
                }
            }
            Err(e) => {
                self.reporter.report(&Fault::DisplayFailed {
                    detail: e.to_string(),
                });
            }
        }

        lifetime.settle();
    }

    /// Handle one notification click.
    ///
    /// Dismisses the notification first, then focuses the first open window
    /// whose current url exactly matches the attached url, or opens a new
    /// window when none matches. A focus failure after a match (the window
    /// may have closed since the snapshot) falls back to opening a new
    /// window, so exactly one navigation action happens per click.
    pub async fn handle_click(&self, event: ClickEvent) {
        let ClickEvent {
            notification,
            lifetime,
        } = event;

        if let Err(e) = self.surface.dismiss(notification.id).await {
            self.reporter.report(&Fault::DisplayFailed {
                detail: e.to_string(),
            });
        }
        let recorded_url = self.close_record(notification.id);

        // The url was resolved before display; prefer the one the surface
        // attached, then the agent's own record, then the root path.
        let target = notification
            .url
            .or(recorded_url)
            .unwrap_or_else(|| self.defaults.root_url.clone());

        let windows = match self.windows.match_all().await {
            Ok(windows) => windows,
            Err(e) => {
                self.reporter.report(&Fault::WindowSurface {
                    detail: e.to_string(),
                });
                lifetime.settle();
                return;
            }
        };

        match route_click(&target, &windows) {
            Route::Focus(id) => {
                if let Err(e) = self.windows.focus(id).await {
                    self.reporter.report(&Fault::WindowSurface {
                        detail: e.to_string(),
                    });
                    self.open_new(&target).await;
                }
            }
            Route::OpenNew => self.open_new(&target).await,
        }

        lifetime.settle();
    }

    /// Run the clicked notification's record through click and dismissal,
    /// returning the url that was attached at display time
    fn close_record(&self, id: NotificationId) -> Option<String> {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        let mut record = records.remove(&id)?;
        let _ = record.lifecycle.mark_clicked();
        let _ = record.lifecycle.mark_dismissed();
        Some(record.url)
    }

    async fn open_new(&self, url: &str) {
        if let Err(e) = self.windows.open_window(url).await {
            self.reporter.report(&Fault::WindowSurface {
                detail: e.to_string(),
            });
        }
    }
}
