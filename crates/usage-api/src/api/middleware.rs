//! CORS and logging middleware.

use axum::{
    extract::Request,
    http::{header::InvalidHeaderValue, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::{debug, error, trace, warn};

/// CORS policy for a single trusted origin.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request rather than answered with a wildcard.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Logs each request with its latency.
///
/// Server errors mean an upstream source let the usage request down and are
/// logged at `error`; client errors at `warn`. Health checks stay at `trace`
/// so probing load balancers do not flood the log.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %path, status, elapsed_ms, "Usage request failed upstream");
    } else if response.status().is_client_error() {
        warn!(%method, %path, status, elapsed_ms, "Request rejected");
    } else if path == "/health" {
        trace!(%method, %path, status, elapsed_ms, "Health check");
    } else {
        debug!(%method, %path, status, elapsed_ms, "Request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_origin() {
        assert!(cors_layer("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer("http://bad\norigin").is_err());
    }

    #[tokio::test]
    async fn test_logging_middleware_passes_response_through() {
        use axum::{body::Body, http::StatusCode, routing::get, Router};
        use axum::http::Request as HttpRequest;
        use tower::ServiceExt;

        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/usage", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(logging_middleware));

        for (uri, expected) in [
            ("/health", StatusCode::OK),
            ("/usage", StatusCode::INTERNAL_SERVER_ERROR),
            ("/missing", StatusCode::NOT_FOUND),
        ] {
            let response = app
                .clone()
                .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), expected, "{}", uri);
        }
    }
}
