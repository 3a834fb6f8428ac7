//! HTTP middleware stack for the calculator server.
//!
//! Layers are listed outermost first: the first layer sees the request first
//! on the way in and the response last on the way out.

use axum::extract::DefaultBodyLimit;
use axum::http::header::HeaderName;
use axum::http::{Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::config::NetworkConfig;

/// Wraps `router` in the transport-level middleware configured by `config`.
///
/// **Ordering (outermost to innermost):**
/// 1. `SetRequestId` -- assigns a UUID v4 `X-Request-Id` to every request
/// 2. `Tracing` -- request/response spans
/// 3. `Compression` -- gzip responses (mostly the HTML page)
/// 4. `CORS` -- allowed origins from configuration
/// 5. `Timeout` -- 408 when a request exceeds `request_timeout`
/// 6. `PropagateRequestId` -- echoes `X-Request-Id` on the response
/// 7. `DefaultBodyLimit` -- rejects bodies above `max_body_bytes` with 413
pub fn with_http_layers(router: Router, config: &NetworkConfig) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(build_cors_layer(&config.cors_origins))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.request_timeout,
            ))
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(DefaultBodyLimit::max(config.max_body_bytes)),
    )
}

/// Builds the CORS layer. A `"*"` entry allows any origin; otherwise each
/// parseable origin is added to an allowlist and the rest are skipped.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse().ok()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    use super::*;

    fn layered() -> Router {
        with_http_layers(
            Router::new().route("/ping", get(|| async { "pong" })),
            &NetworkConfig::default(),
        )
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = layered()
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let response = layered()
            .oneshot(
                Request::get("/ping")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn wildcard_cors_allows_any_origin() {
        let response = layered()
            .oneshot(
                Request::get("/ping")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn cors_allowlist_echoes_only_listed_origins() {
        let config = NetworkConfig {
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string(),
            ],
            ..NetworkConfig::default()
        };
        let router = with_http_layers(
            Router::new().route("/ping", get(|| async { "pong" })),
            &config,
        );
        let with_origin = |origin: &str| {
            Request::get("/ping")
                .header("origin", origin)
                .body(Body::empty())
                .unwrap()
        };

        let allowed = router
            .clone()
            .oneshot(with_origin("https://example.com"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()["access-control-allow-origin"],
            "https://example.com"
        );

        let denied = router
            .oneshot(with_origin("https://evil.example"))
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::OK);
        assert!(!denied.headers().contains_key("access-control-allow-origin"));
    }
}
