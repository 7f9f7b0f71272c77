//! PushHerald - background push notification agent
//!
//! This crate provides the core functionality for receiving push payloads
//! from a local delivery transport, rendering them as desktop notifications,
//! and routing notification clicks back into the application's open windows.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Payload model, defaulting rules, routing decision, lifecycle
//! - **Application**: The agent use case, port interfaces (traits), dispatcher
//! - **Infrastructure**: Adapter implementations (notify-rust, sockets, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
