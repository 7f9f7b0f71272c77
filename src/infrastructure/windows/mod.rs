//! Window surface infrastructure module
//!
//! Provides the window-control client against the application's socket.

mod socket;

pub use socket::SocketWindowSurface;
