//! # Portal REST API
//!
//! HTTP endpoints of the isotank customer portal: inventory listing and
//! export, container detail and notes, documents, dashboard, alerts, BI and
//! booking reports, contact, and catalogs.
//!
//! ## Architecture
//!
//! Handlers stay thin. Each one resolves the [`Caller`](isoportal_web::Caller)
//! from the identity headers, hands its scope and parsed query to the
//! engine services held by [`AppContext`], and serialises the result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use isoportal_rest_api::{create_rest_app, AppConfig, AppContext};
//!
//! # async fn example(context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_rest_app(context, AppConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;

// Re-export commonly used types
pub use app::{create_rest_app, AppConfig};
pub use context::AppContext;
pub use errors::{RestError, RestResult};
