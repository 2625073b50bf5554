use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("say_proxy_requests_total", "Total /say requests handled")
        .expect("register requests_total")
});

pub static UPSTREAM_ERRORS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "say_proxy_upstream_errors_total",
        "Upstream calls that failed or returned non-2xx"
    )
    .expect("register upstream_errors_total")
});

pub static REQUEST_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "say_proxy_request_duration_seconds",
        "Request duration in seconds",
        vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("register request_duration")
});

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    // touch statics so families show up before the first request
    Lazy::force(&REQUESTS_TOTAL);
    Lazy::force(&UPSTREAM_ERRORS_TOTAL);
    Lazy::force(&REQUEST_DURATION);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
