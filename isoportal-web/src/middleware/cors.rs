use axum::http::{header, HeaderName, HeaderValue, Method};
use isoportal_config::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Create the CORS layer for the portal API.
///
/// `*` anywhere in the origin list allows any origin. Origins that are not
/// valid header values are skipped with an error log.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS configured to allow any origin");
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::error!(%origin, "Invalid origin in CORS configuration: {}", e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-portal-role"),
            HeaderName::from_static("x-portal-client"),
            HeaderName::from_static("x-portal-user"),
            HeaderName::from_static("x-portal-email"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([header::CONTENT_DISPOSITION, HeaderName::from_static("x-request-id")])
        .max_age(PREFLIGHT_MAX_AGE)
}
