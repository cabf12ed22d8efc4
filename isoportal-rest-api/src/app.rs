//! Router setup

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use isoportal_config::CorsConfig;
use isoportal_web::{cors_layer, request_id_middleware, WebError};
use tower_http::trace::TraceLayer;

use crate::{context::AppContext, handlers};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API path prefix
    pub api_prefix: String,
    pub cors: CorsConfig,
    /// Enable request ID tracking
    pub enable_request_id: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api/v1".to_string(),
            cors: CorsConfig::default(),
            enable_request_id: true,
            enable_tracing: true,
        }
    }
}

/// Create the complete REST API application
pub fn create_rest_app(context: AppContext, config: AppConfig) -> Router {
    let mut app = Router::new()
        // Health endpoints (no prefix)
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .nest(&config.api_prefix, create_api_router())
        .fallback(handle_not_found)
        .with_state(context);

    // Layers wrap outwards: the last one added runs first
    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    app.layer(cors_layer(&config.cors))
}

fn create_api_router() -> Router<AppContext> {
    Router::new()
        // Inventory
        .route("/inventory", get(handlers::list_inventory))
        .route("/inventory/export", get(handlers::export_inventory))
        .route("/inventory/{code}", get(handlers::get_container))
        .route("/inventory/{code}/export", get(handlers::export_container))
        .route("/inventory/{code}/observations", post(handlers::add_observation))
        .route("/documents", get(handlers::list_documents))
        // Dashboards and reports
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/alerts", get(handlers::get_alerts))
        .route("/alerts/count", get(handlers::get_alert_count))
        .route("/reports", get(handlers::get_report))
        .route("/reports/export", get(handlers::export_report))
        .route("/reports/bookings", get(handlers::get_booking_report))
        // Contact
        .route("/contact", get(handlers::get_contact).post(handlers::send_contact))
        .route(
            "/settings/contact",
            get(handlers::get_contact_settings).put(handlers::update_contact_settings),
        )
        // Catalogs
        .route("/clients", get(handlers::list_clients))
        .route("/statuses", get(handlers::list_statuses))
}

async fn handle_not_found() -> WebError {
    WebError::not_found("The requested resource was not found")
}
