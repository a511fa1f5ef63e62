//! Observability setup for Mentor: structured logging with an optional
//! OpenTelemetry trace export.

pub mod tracing_setup;
