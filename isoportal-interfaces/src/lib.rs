//! # Isoportal Interfaces
//!
//! Ports between the portal engine and the collaborators it does not own.
//!
//! ## Main Interfaces
//!
//! - [`InventorySource`] - upstream inventory, local or remote
//! - [`EmailSink`] - outbound contact mail
//! - [`ContactSettingsRepository`] - stored contact/SMTP settings
//! - [`ObservationRepository`] - internal notes on containers

pub mod contact;
pub mod inventory;
pub mod observations;

// Re-export commonly used types
pub use contact::{ContactSettings, ContactSettingsRepository, EmailSink, MailError, OutgoingMail, SmtpCredentials};
pub use inventory::{CandidateQuery, InventorySource, SourceError};
pub use observations::{ObservationRepository, RepositoryError};
