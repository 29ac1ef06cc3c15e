//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; the subscriber is installed in `main`
//! - Request-level spans come from `tower_http::trace` on the serving stack
//! - Metric updates are cheap counter increments and are no-ops until an
//!   exporter is installed

pub mod metrics;
