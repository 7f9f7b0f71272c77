//! Event dispatch loop
//!
//! The host delivers push and click events on its own schedule; the
//! dispatcher drains them from a channel and runs each handler on its own
//! task, so a slow window enumeration delays only its own click event and
//! never blocks the other event type. No ordering between independent
//! events is guaranteed beyond channel FIFO dispatch.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::agent::NotificationAgent;
use super::events::{ClickEvent, PushEvent};
use super::ports::{FaultReporter, NotificationSurface, WindowSurface};

/// Events delivered to the dispatcher
#[derive(Debug)]
pub enum AgentEvent {
    Push(PushEvent),
    Click(ClickEvent),
    Shutdown,
}

/// Dispatches inbound events to the agent until shutdown
pub struct AgentDispatcher<S, W, F>
where
    S: NotificationSurface + 'static,
    W: WindowSurface + 'static,
    F: FaultReporter + 'static,
{
    agent: Arc<NotificationAgent<S, W, F>>,
    receiver: mpsc::Receiver<AgentEvent>,
}

impl<S, W, F> AgentDispatcher<S, W, F>
where
    S: NotificationSurface + 'static,
    W: WindowSurface + 'static,
    F: FaultReporter + 'static,
{
    /// Create a dispatcher draining the given event channel
    pub fn new(agent: Arc<NotificationAgent<S, W, F>>, receiver: mpsc::Receiver<AgentEvent>) -> Self {
        Self { agent, receiver }
    }

    /// Run until a shutdown event arrives or all senders are dropped.
    ///
    /// Events already spawned keep running; their lifetimes settle
    /// independently of the loop.
    pub async fn run(mut self) {
        while let Some(event) = self.receiver.recv().await {
            match event {
                AgentEvent::Push(push) => {
                    let agent = Arc::clone(&self.agent);
                    tokio::spawn(async move {
                        agent.handle_push(push).await;
                    });
                }
                AgentEvent::Click(click) => {
                    let agent = Arc::clone(&self.agent);
                    tokio::spawn(async move {
                        agent.handle_click(click).await;
                    });
                }
                AgentEvent::Shutdown => break,
            }
        }
    }
}
