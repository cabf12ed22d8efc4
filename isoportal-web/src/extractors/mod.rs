pub mod caller;
pub mod query;

pub use caller::{Caller, OptionalCaller, CLIENT_HEADER, EMAIL_HEADER, ROLE_HEADER, USER_HEADER};
pub use query::{ExportFormat, ExportQuery, QueryParams};
