use isoportal_core::contact::ContactInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactQuery {
    pub code: Option<String>,
}

/// Contact page: public contact details plus the isotank being asked about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageResponse {
    #[serde(flatten)]
    pub info: ContactInfo,
    /// Upper-cased; empty when no code was given
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSentResponse {
    pub sent: bool,
}
