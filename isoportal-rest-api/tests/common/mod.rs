//! Shared harness: the full router over the seeded local source, driven
//! in-process with `oneshot`.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use isoportal_core::{ContactService, FixedClock, InventoryService, ReportSettings};
use isoportal_interfaces::ContactSettings;
use isoportal_rest_api::{create_rest_app, AppConfig, AppContext};
use isoportal_storage::testing::MockMailer;
use isoportal_storage::{InMemoryContactSettings, InMemoryObservations, LocalInventorySource};
use isoportal_web::{CLIENT_HEADER, ROLE_HEADER, USER_HEADER};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub source: Arc<LocalInventorySource>,
}

pub fn build_app(mailer: MockMailer, contact_defaults: ContactSettings) -> TestApp {
    let clock = Arc::new(FixedClock::on(today()));
    let source = Arc::new(LocalInventorySource::seeded(today()));
    let inventory = InventoryService::new(source.clone(), ReportSettings::default()).with_clock(clock.clone());
    let contact = ContactService::new(
        Arc::new(InMemoryContactSettings::new()),
        Arc::new(mailer),
        contact_defaults,
    );
    let context = AppContext::new(
        Arc::new(inventory),
        Arc::new(contact),
        Arc::new(InMemoryObservations::new()),
        clock,
    );
    TestApp {
        router: create_rest_app(context, AppConfig::default()),
        source,
    }
}

/// App whose mail sink must never be called
pub fn seeded_app() -> TestApp {
    let mut mailer = MockMailer::new();
    mailer.expect_send().never();
    build_app(mailer, ContactSettings::default())
}

pub enum As {
    Anonymous,
    Admin,
    Client(&'static str),
}

pub fn request(method: Method, uri: &str, who: As, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    match who {
        As::Anonymous => {}
        As::Admin => {
            builder = builder.header(ROLE_HEADER, "admin").header(USER_HEADER, "Carla Depotce");
        }
        As::Client(client) => {
            let client = HeaderValue::from_bytes(client.as_bytes()).unwrap();
            builder = builder.header(ROLE_HEADER, "client").header(CLIENT_HEADER, client);
        }
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn get(uri: &str, who: As) -> Request<Body> {
    request(Method::GET, uri, who, None)
}

pub async fn send_raw(app: &TestApp, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    use tower::ServiceExt;

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, _, bytes) = send_raw(app, request).await;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
