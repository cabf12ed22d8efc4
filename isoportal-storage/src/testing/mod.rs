//! Testing utilities for isoportal-storage
//!
//! Mock implementations of every port, built with mockall, and a builder
//! for container records. Enable with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! isoportal-storage = { path = "../isoportal-storage", features = ["testing"] }
//! ```

pub mod builders;
pub mod mocks;

pub use builders::ContainerRecordBuilder;
pub use mocks::{MockContactStore, MockInventory, MockMailer, MockObservationStore};
