//! HTTP request/response tracing middleware.

use axum::{body::Body, http::Request};
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Trace layer with a request-id aware span.
pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span>;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with method, URI, version and the
/// `x-request-id` set by the outer request-id layer. Other headers are not
/// recorded, so Basic credentials never reach the logs.
///
/// **On Response:** logs at `INFO` level with status code and latency in
/// milliseconds.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/add version=HTTP/1.1 request_id=6f1c...}: finished processing request latency=3 ms status=303
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(req: &Request<Body>) -> Span {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        version = ?req.version(),
        request_id,
    )
}
