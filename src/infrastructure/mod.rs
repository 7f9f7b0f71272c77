//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the notification service, the application's
//! window-control socket, and the delivery transport.

pub mod config;
pub mod notification;
pub mod reporter;
pub mod transport;
pub mod windows;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::NotifyRustSurface;
pub use reporter::TracingFaultReporter;
pub use transport::{PushSocketClient, PushSocketServer, SocketPath};
pub use windows::SocketWindowSurface;
