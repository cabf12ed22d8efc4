use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentsQuery {
    pub search: Option<String>,
}

/// `?client=&status=` on the BI report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub client: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /inventory/{code}/observations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewObservationRequest {
    #[serde(default)]
    pub text: String,
}
