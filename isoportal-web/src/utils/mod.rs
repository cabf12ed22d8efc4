pub mod download;
pub mod response;

pub use download::file_download;
pub use response::{ApiResponse, ResponseMeta};
