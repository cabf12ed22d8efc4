//! Inventory query and reporting engine
//!
//! This crate turns a raw candidate set of container records plus a set of
//! query parameters into pages, dashboard cards, alerts, BI reports and
//! export rows. Everything except [`service`] is pure and synchronous; the
//! service fetches from an [`InventorySource`](isoportal_interfaces::InventorySource)
//! and then runs the pipeline over its private copy of the records.

pub mod aggregate;
pub mod clock;
pub mod contact;
pub mod error;
pub mod export;
pub mod report;
pub mod scope;
pub mod service;
pub mod settings;
pub mod sort;

// Re-export commonly used types at the crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{PortalError, Result};
pub use scope::{CallerScope, InventoryQuery, QueryPlan, ResidualFilter};
pub use service::{ContactService, InventoryService};
pub use settings::ReportSettings;
pub use sort::{PageResult, SortKey};
