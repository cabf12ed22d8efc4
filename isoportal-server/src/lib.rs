//! Isotank customer portal server
//!
//! Wires configuration, the inventory source, the reporting engine and the
//! REST router into one process.

pub mod mail;
pub mod services;
pub mod startup;

pub use mail::TracingMailSink;
pub use services::{contact_defaults, report_settings, ServiceContainer};
pub use startup::Server;
