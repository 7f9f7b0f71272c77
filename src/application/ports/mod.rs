//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod reporter;
pub mod surface;
pub mod windows;

// Re-export common types
pub use config::ConfigStore;
pub use reporter::{Fault, FaultReporter};
pub use surface::{NotificationId, NotificationSurface, SurfaceError};
pub use windows::{WindowError, WindowSurface};
