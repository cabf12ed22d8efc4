use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::errors::WebError;

/// Typed query string whose parse failures become 400 responses
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::bad_request(format!("Invalid query parameters: {}", err.body_text())))?;
        Ok(QueryParams(value))
    }
}

/// Serialization target of an export endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// `?format=` on export endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};
    use isoportal_core::InventoryQuery;

    async fn extract<T: DeserializeOwned>(uri: &str) -> Result<T, WebError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::<T>::from_request_parts(&mut parts, &()).await.map(|q| q.0)
    }

    #[tokio::test]
    async fn test_inventory_query_uses_camel_case() {
        let query: InventoryQuery =
            extract("/inventory?status=Ag.%20Limpeza,Ag.%20Reparo&sortBy=daysInStatus&ascending=false&pageSize=25")
                .await
                .unwrap();
        assert_eq!(query.status_values(), vec!["Ag. Limpeza", "Ag. Reparo"]);
        assert_eq!(query.sort_by.as_deref(), Some("daysInStatus"));
        assert_eq!(query.ascending, Some(false));
        assert_eq!(query.page_size, Some(25));
    }

    #[tokio::test]
    async fn test_unparsable_value_is_bad_request() {
        let err = extract::<InventoryQuery>("/inventory?page=first").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_format() {
        let query: ExportQuery = extract("/export").await.unwrap();
        assert_eq!(query.format, ExportFormat::Csv);
        let query: ExportQuery = extract("/export?format=json&client=x").await.unwrap();
        assert_eq!(query.format, ExportFormat::Json);
        assert!(extract::<ExportQuery>("/export?format=xlsx").await.is_err());
    }
}
