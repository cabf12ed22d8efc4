//! Remote inventory over the MBM HTTP API
//!
//! [`MbmClient`] implements [`InventorySource`](isoportal_interfaces::InventorySource)
//! against the upstream yard-management system. The wire format uses the
//! upstream's Portuguese field names; [`dto`] maps it onto
//! [`ContainerRecord`](isoportal_api_types::ContainerRecord).

pub mod client;
pub mod config;
pub mod dto;
pub mod errors;

// Re-export main types for convenience
pub use client::MbmClient;
pub use config::MbmConfig;
pub use errors::HttpError;
