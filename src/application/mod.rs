//! Application layer - Use cases and port interfaces
//!
//! Contains the core agent operations and trait definitions
//! for external system interactions.

pub mod agent;
pub mod dispatch;
pub mod events;
pub mod ports;

// Re-export use cases
pub use agent::NotificationAgent;
pub use dispatch::{AgentDispatcher, AgentEvent};
pub use events::{ClickEvent, ClickedNotification, EventCompletion, EventLifetime, PushEvent};
