//! MBM client against an in-process axum stub

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveTime};
use isoportal_core::FixedClock;
use isoportal_http::{MbmClient, MbmConfig};
use isoportal_interfaces::{CandidateQuery, InventorySource, SourceError};
use serde_json::{json, Value};

fn tanks() -> Vec<Value> {
    vec![
        json!({
            "codigo": "DHDU1274480",
            "produto": "Etanol",
            "cliente": "DEN HARTOGH",
            "status": "Ag. Envio Estimativa",
            "dataInicioStatus": "2026-10-15T00:00:00",
            "previsaoLiberacao": "2026-10-21T00:00:00",
            "numeroBooking": "BK-2026-001"
        }),
        json!({
            "codigo": "EXFU5567363",
            "produto": "Etanol",
            "cliente": "Empresa Alpha",
            "status": "Ag. Limpeza",
            "diasNoStatus": 0
        }),
    ]
}

async fn list(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Value>> {
    let filtered = tanks()
        .into_iter()
        .filter(|tank| {
            params
                .get("cliente")
                .is_none_or(|client| tank["cliente"] == client.as_str())
        })
        .filter(|tank| params.get("status").is_none_or(|status| tank["status"] == status.as_str()))
        .collect();
    Json(filtered)
}

async fn by_code(Path(code): Path<String>) -> Result<Json<Value>, StatusCode> {
    tanks()
        .into_iter()
        .find(|tank| tank["codigo"] == code.as_str())
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn stub() -> MbmClient {
    let router = Router::new()
        .route("/api/isotanques", get(list))
        .route("/api/isotanques/{code}", get(by_code))
        .route(
            "/api/clientes",
            get(|| async { Json(vec!["Empresa Alpha", "DEN HARTOGH", "Empresa Alpha"]) }),
        )
        .route(
            "/api/status",
            get(|| async { Json(vec!["Ag. Off Hire", "Ag. Envio Estimativa", "Ag. Limpeza"]) }),
        );
    let base = spawn(router).await;
    MbmClient::new(MbmConfig::new(&base).unwrap()).unwrap()
}

#[tokio::test]
async fn test_list_passes_pushdown_filters() {
    let client = stub().await;
    let all = client.fetch_candidates(&CandidateQuery::new()).await.unwrap();
    assert_eq!(all.len(), 2);

    let alpha = client
        .fetch_candidates(&CandidateQuery::new().client("Empresa Alpha"))
        .await
        .unwrap();
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].code, "EXFU5567363");
    assert_eq!(alpha[0].status, "Ag. Limpeza");
}

#[tokio::test]
async fn test_lookup_by_code() {
    let client = stub().await;
    let found = client.fetch_by_code(" DHDU1274480 ").await.unwrap().unwrap();
    assert_eq!(found.booking(), Some("BK-2026-001"));
    assert!(client.fetch_by_code("NOPE0000000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_catalogs() {
    let client = stub().await;
    assert_eq!(
        client.fetch_distinct_clients().await.unwrap(),
        vec!["DEN HARTOGH".to_string(), "Empresa Alpha".to_string()]
    );
    assert_eq!(client.fetch_status_catalog().await.unwrap().len(), 3);
    assert!(client.health_check().await.is_ok());
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let router = Router::new().route(
        "/api/isotanques",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn(router).await;
    let client = MbmClient::new(MbmConfig::new(&base).unwrap()).unwrap();

    let err = client.fetch_candidates(&CandidateQuery::new()).await.unwrap_err();
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_garbage_body_is_invalid_response() {
    let router = Router::new().route("/api/isotanques", get(|| async { "<html>maintenance</html>" }));
    let base = spawn(router).await;
    let client = MbmClient::new(MbmConfig::new(&base).unwrap()).unwrap();

    let err = client.fetch_candidates(&CandidateQuery::new()).await.unwrap_err();
    assert!(matches!(err, SourceError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_unavailable() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = MbmConfig::new(&format!("http://{}", addr))
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    let client = MbmClient::new(config).unwrap();
    let err = client.fetch_candidates(&CandidateQuery::new()).await.unwrap_err();
    assert!(err.is_unavailable());
    assert!(client.health_check().await.is_err());
}

#[tokio::test]
async fn test_day_count_is_anchored_on_injected_clock() {
    let base = spawn(Router::new().route("/api/isotanques", get(list))).await;
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let client = MbmClient::new(MbmConfig::new(&base).unwrap())
        .unwrap()
        .with_clock(Arc::new(FixedClock::on(today)));

    let records = client
        .fetch_candidates(&CandidateQuery::new().client("Empresa Alpha"))
        .await
        .unwrap();
    assert_eq!(records[0].status_started_at, Some(today.and_time(NaiveTime::MIN)));
}

#[tokio::test]
async fn test_out_of_range_day_count_is_dropped() {
    let router = Router::new().route(
        "/api/isotanques",
        get(|| async {
            Json(vec![json!({
                "codigo": "EXFU5567363",
                "cliente": "Empresa Alpha",
                "status": "Ag. Limpeza",
                "diasNoStatus": i64::MAX
            })])
        }),
    );
    let base = spawn(router).await;
    let client = MbmClient::new(MbmConfig::new(&base).unwrap()).unwrap();

    let records = client.fetch_candidates(&CandidateQuery::new()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status_started_at, None);
    assert_eq!(records[0].days_in_status, None);
}
