//! Fault reporting port interface
//!
//! The agent never surfaces failures as user-visible errors; every failure
//! funnels into this sink so tests can assert on the kind reported rather
//! than on log text.

use thiserror::Error;

/// The faults the agent can encounter while handling events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    /// A push event arrived without a payload. Expected and recoverable.
    #[error("Push event carried no payload")]
    MissingPayload,

    /// The payload bytes did not decode as a recognized JSON shape
    #[error("Malformed push payload: {detail}")]
    MalformedPayload { detail: String },

    /// The host notification surface rejected a show or dismiss call
    #[error("Notification display failed: {detail}")]
    DisplayFailed { detail: String },

    /// Window enumeration, focus, or open against the host failed
    #[error("Window surface failure: {detail}")]
    WindowSurface { detail: String },
}

impl Fault {
    /// Stable kind label for structured logging and assertions
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingPayload => "missing_payload",
            Self::MalformedPayload { .. } => "malformed_payload",
            Self::DisplayFailed { .. } => "display_failed",
            Self::WindowSurface { .. } => "window_surface",
        }
    }
}

/// Port for the structured fault sink injected alongside the host capabilities
pub trait FaultReporter: Send + Sync {
    /// Record one fault. Must not fail or block.
    fn report(&self, fault: &Fault);
}

/// Blanket implementation for boxed reporter types
impl FaultReporter for Box<dyn FaultReporter> {
    fn report(&self, fault: &Fault) {
        self.as_ref().report(fault)
    }
}
