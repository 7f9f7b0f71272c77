//! Push delivery transport
//!
//! The delivery service's local relay hands payloads to the agent over a
//! unix domain socket; the same socket serves the client commands.

mod unix_socket;

pub use unix_socket::{ActiveFn, PushSocketClient, PushSocketServer, SocketPath};
