//! Server startup and shutdown logic

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use isoportal_config::PortalConfig;
use isoportal_core::{Clock, SystemClock};
use isoportal_rest_api::{create_rest_app, AppConfig};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use crate::services::ServiceContainer;

pub struct Server {
    config: PortalConfig,
    services: ServiceContainer,
}

impl Server {
    /// Build services on the wall clock
    pub async fn new(config: PortalConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock)).await
    }

    pub async fn with_clock(config: PortalConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let services = ServiceContainer::new(&config, clock).await?;
        Ok(Self { config, services })
    }

    pub fn build_app(&self) -> Router {
        let rest_config = AppConfig {
            api_prefix: self.config.server.api_prefix.clone(),
            cors: self.config.server.cors.clone(),
            ..Default::default()
        };

        Router::new()
            .route("/", get(root_handler))
            .merge(create_rest_app(self.services.context.clone(), rest_config))
    }

    pub async fn start(self) -> Result<()> {
        let app = self.build_app();
        let addr = self.config.server.socket_address();

        self.log_config_summary();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }

    fn log_config_summary(&self) {
        let config = &self.config;
        info!(
            bind = %config.server.socket_address(),
            api_prefix = %config.server.api_prefix,
            source = ?config.source.kind,
            cors_origins = ?config.server.cors.allowed_origins,
            stuck_threshold_days = config.reporting.stuck_threshold_days,
            contact_configured = config.contact.destination_email.is_some(),
            "Portal configuration"
        );
    }
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": "Isotank Customer Portal",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "rest_api": "/api/v1",
            "health": "/health",
            "ready": "/ready"
        }
    }))
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
