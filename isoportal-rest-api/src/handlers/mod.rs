pub mod catalog;
pub mod contact;
pub mod health;
pub mod inventory;
pub mod reports;

// Re-export handler functions
pub use catalog::*;
pub use contact::*;
pub use health::*;
pub use inventory::*;
pub use reports::*;
