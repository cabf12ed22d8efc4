pub mod common;
pub mod contact;
pub mod inventory;

pub use common::{AlertCountResponse, HealthResponse, ReadinessResponse};
pub use contact::{ContactPageResponse, ContactQuery, ContactSentResponse};
pub use inventory::{DocumentsQuery, NewObservationRequest, ReportQuery};
