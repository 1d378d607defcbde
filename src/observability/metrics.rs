//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dashboard_proxy_requests_total` (counter): proxied calls by operation, status
//! - `dashboard_proxy_request_duration_seconds` (histogram): proxy call latency
//! - `dashboard_backend_errors_total` (counter): backend failures by operation, kind
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one proxied call.
pub fn record_request(operation: &'static str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "dashboard_proxy_requests_total",
        "operation" => operation,
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "dashboard_proxy_request_duration_seconds",
        "operation" => operation,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a failed backend call.
pub fn record_backend_error(operation: &'static str, kind: &'static str) {
    metrics::counter!(
        "dashboard_backend_errors_total",
        "operation" => operation,
        "kind" => kind
    )
    .increment(1);
}
