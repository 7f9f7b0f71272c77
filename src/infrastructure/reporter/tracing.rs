//! Fault sink emitting structured tracing events
//!
//! Each fault kind maps to a severity: a missing payload is an expected
//! condition, a malformed payload is a discarded input, and host surface
//! failures are errors the operator should see.

use tracing::{error, info, warn};

use crate::application::ports::{Fault, FaultReporter};

/// Fault reporter backed by the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFaultReporter;

impl TracingFaultReporter {
    /// Create a new tracing fault reporter
    pub fn new() -> Self {
        Self
    }
}

impl FaultReporter for TracingFaultReporter {
    fn report(&self, fault: &Fault) {
        match fault {
            Fault::MissingPayload => {
                info!(kind = fault.kind(), "push event received but no data");
            }
            Fault::MalformedPayload { detail } => {
                warn!(kind = fault.kind(), %detail, "discarding malformed push payload");
            }
            Fault::DisplayFailed { detail } => {
                error!(kind = fault.kind(), %detail, "error displaying notification");
            }
            Fault::WindowSurface { detail } => {
                error!(kind = fault.kind(), %detail, "window surface call failed");
            }
        }
    }
}
