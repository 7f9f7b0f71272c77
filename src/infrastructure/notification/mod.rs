//! Notification surface infrastructure module
//!
//! Provides the desktop notification adapter using notify-rust.

mod notify_rust;

pub use self::notify_rust::NotifyRustSurface;
