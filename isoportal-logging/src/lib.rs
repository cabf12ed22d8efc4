//! Tracing setup for the isotank portal
//!
//! One entry point, [`init_tracing`], driven by the `logging` configuration
//! domain. Calling it twice is harmless: the second call logs at debug level
//! and leaves the first subscriber in place.

pub mod init;

pub use init::{build_env_filter, init_simple_tracing, init_tracing};
