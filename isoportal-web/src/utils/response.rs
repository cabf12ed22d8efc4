use axum::{
    response::{IntoResponse, Response},
    Json,
};
use isoportal_api_types::PaginationMeta;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Response metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

impl<T> ApiResponse<T> {
    /// Create a simple response with just data
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    /// Create response with pagination metadata
    pub fn with_pagination(data: T, pagination: PaginationMeta) -> Self {
        Self {
            data,
            meta: Some(ResponseMeta {
                pagination: Some(pagination),
                request_id: None,
                timestamp: Some(chrono::Utc::now()),
            }),
        }
    }

    /// Attach the request id, creating the metadata block if needed
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        let meta = self.meta.get_or_insert_with(|| ResponseMeta {
            pagination: None,
            request_id: None,
            timestamp: Some(chrono::Utc::now()),
        });
        meta.request_id = Some(request_id.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_response_has_no_meta() {
        let value = serde_json::to_value(ApiResponse::new(vec!["Ag. Limpeza"])).unwrap();
        assert_eq!(value["data"][0], "Ag. Limpeza");
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_pagination_and_request_id() {
        let response = ApiResponse::with_pagination(vec![1, 2], PaginationMeta::new(2, 10, 23)).request_id("req-1");
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["meta"]["pagination"]["pages"], 3);
        assert_eq!(value["meta"]["pagination"]["hasNext"], true);
        assert_eq!(value["meta"]["requestId"], "req-1");
    }
}
