//! Fault reporter infrastructure module

mod tracing;

pub use self::tracing::TracingFaultReporter;
