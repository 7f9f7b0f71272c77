//! Displayed notification value objects and lifecycle

mod content;
mod lifecycle;

pub use content::{NotificationContent, NotificationDefaults};
pub use lifecycle::{InvalidPhaseTransition, NotificationLifecycle, NotificationPhase};
