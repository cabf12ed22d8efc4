//! # Portal web utilities
//!
//! Web plumbing shared by the portal's HTTP surface:
//!
//! - **Errors**: [`WebError`] renders every failure as `{"error":{"code","message"}}`
//! - **Extractors**: the caller identity behind each request and typed query strings
//! - **Middleware**: request ids and CORS
//! - **Utilities**: the `{"data", "meta"}` response envelope and file downloads
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use isoportal_web::{cors_layer, request_id_middleware, Caller};
//!
//! async fn whoami(caller: Caller) -> String {
//!     format!("{:?}", caller.scope)
//! }
//!
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .layer(middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer(&Default::default()));
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod utils;

// Re-export commonly used types and functions
pub use errors::{ValidationError, WebError, WebResult};
pub use extractors::{
    Caller, ExportFormat, ExportQuery, OptionalCaller, QueryParams, CLIENT_HEADER, EMAIL_HEADER,
    ROLE_HEADER, USER_HEADER,
};
pub use middleware::{cors_layer, request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use utils::{file_download, ApiResponse, ResponseMeta};
