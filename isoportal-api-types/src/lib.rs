//! Shared types for the isotank portal
//!
//! This crate holds the container record model, the canonical workflow
//! statuses, and the pagination and error shapes returned by the HTTP API.
//! Every other crate in the workspace depends on it; it depends on nothing
//! but serialization and date handling.

pub mod errors;
pub mod pagination;
pub mod record;
pub mod status;

// Re-export main types for convenience
pub use errors::{ApiError, ApiResult};
pub use pagination::{ListResponse, PaginationMeta};
pub use record::{ContainerRecord, Observation};
