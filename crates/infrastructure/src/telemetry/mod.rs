//! Logging initialisation
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer writing to stderr, so command output on stdout stays clean.

mod subscriber;

pub use subscriber::{TelemetryError, init_telemetry, resolve_filter};
