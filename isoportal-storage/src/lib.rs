//! Local storage for the isotank portal
//!
//! This crate provides the seeded local inventory source used when no
//! upstream MBM system is configured, plus in-memory stores for contact
//! settings and container observations.

pub mod contact;
pub mod error;
pub mod local;
pub mod observations;
pub mod seed;

#[cfg(feature = "testing")]
pub mod testing;

// Re-export core types for convenience
pub use contact::InMemoryContactSettings;
pub use error::{StorageError, StorageResult};
pub use local::LocalInventorySource;
pub use observations::InMemoryObservations;
