//! Metrics collection and exposition.
//!
//! # Metrics
//! - `redirector_requests_total` (counter): requests by lookup outcome
//!   (`hit` = redirected, `miss` = delegated to the fallback)

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, serving scrapes on `addr`.
///
/// Must be called from within a Tokio runtime. Failure to install is
/// logged and not fatal; the service keeps running without an exporter.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record the outcome of a single path lookup.
pub fn record_lookup(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!("redirector_requests_total", "outcome" => outcome).increment(1);
}
