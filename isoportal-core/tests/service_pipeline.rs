//! End-to-end runs of the inventory service over the seeded local source
//! and over mocks that record what gets pushed down.

use std::sync::Arc;

use chrono::NaiveDate;
use isoportal_api_types::status::{CLEANING, REPAIR};
use isoportal_core::export::NullPlaceholder;
use isoportal_core::report::BookingReportQuery;
use isoportal_core::{CallerScope, FixedClock, InventoryQuery, InventoryService, PortalError, ReportSettings};
use isoportal_interfaces::SourceError;
use isoportal_storage::testing::{ContainerRecordBuilder, MockInventory};
use isoportal_storage::{seed, LocalInventorySource};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn seeded_service() -> InventoryService {
    InventoryService::new(
        Arc::new(LocalInventorySource::seeded(today())),
        ReportSettings::default(),
    )
    .with_clock(Arc::new(FixedClock::on(today())))
}

fn alpha() -> CallerScope {
    CallerScope::Client(seed::EMPRESA_ALPHA.to_string())
}

#[tokio::test]
async fn test_admin_first_page_uses_default_size() {
    let view = seeded_service()
        .inventory_page(&CallerScope::Admin, &InventoryQuery::default())
        .await
        .unwrap();

    assert_eq!(view.page.total_count, 23);
    assert_eq!(view.page.page_size, 10);
    assert_eq!(view.page.total_pages, 3);
    assert_eq!(view.page.items[0].code, "DHDL1122334");
    assert_eq!(view.clients.len(), 3);
    assert_eq!(view.status_catalog.len(), 5);
}

#[tokio::test]
async fn test_client_caller_cannot_widen_scope() {
    let query = InventoryQuery {
        client: Some(seed::DEN_HARTOGH.to_string()),
        ..Default::default()
    };
    let view = seeded_service().inventory_page(&alpha(), &query).await.unwrap();

    assert_eq!(view.page.total_count, 7);
    assert!(view.page.items.iter().all(|r| r.client == seed::EMPRESA_ALPHA));
    assert!(view.clients.is_empty());
}

#[tokio::test]
async fn test_multi_status_and_upcoming_window() {
    let query = InventoryQuery {
        status: Some(format!("{CLEANING}, {REPAIR}")),
        upcoming: Some(3),
        sort_by: Some("expectedReleaseAt".to_string()),
        ..Default::default()
    };
    let view = seeded_service()
        .inventory_page(&CallerScope::Admin, &query)
        .await
        .unwrap();

    let codes: Vec<_> = view.page.items.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(
        codes,
        vec!["EXFU5567363", "SEDU7788990", "EXFU9988776", "DHDU2273512", "SEDU2233445"]
    );
    assert_eq!(view.cards.total, 5);
}

#[tokio::test]
async fn test_page_past_the_end_is_clamped() {
    let query = InventoryQuery {
        page: Some(99),
        page_size: Some(1000),
        ..Default::default()
    };
    let view = seeded_service()
        .inventory_page(&CallerScope::Admin, &query)
        .await
        .unwrap();
    assert_eq!(view.page.page_size, 100);
    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.items.len(), 23);
}

#[tokio::test]
async fn test_alerts_union_stuck_and_due() {
    let service = seeded_service();
    let alerts = service.alerts(&CallerScope::Admin).await.unwrap();

    let stuck: Vec<_> = alerts.stuck.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(
        stuck,
        vec!["SEDU5544332", "DHDU8899001", "DHDL6677889", "EXFU6632144", "EXFU7711223"]
    );
    assert_eq!(alerts.due_releases.len(), 7);
    assert_eq!(alerts.critical_total, 12);

    assert_eq!(service.alert_count(&alpha()).await.unwrap(), 4);
}

#[tokio::test]
async fn test_export_follows_filters_without_paging() {
    let query = InventoryQuery {
        status: Some(CLEANING.to_string()),
        page_size: Some(5),
        ..Default::default()
    };
    let table = seeded_service()
        .inventory_export(&CallerScope::Admin, &query, NullPlaceholder::Dash)
        .await
        .unwrap();
    assert_eq!(table.title, "Todos os clientes");
    assert_eq!(table.rows.len(), 9);
    // SEDU8063278 has no expected release
    let row = table.rows.iter().find(|row| row[0] == "SEDU8063278").unwrap();
    assert_eq!(row[4], "–");
}

#[tokio::test]
async fn test_booking_report_for_client() {
    let view = seeded_service()
        .booking_report(&alpha(), BookingReportQuery::default())
        .await
        .unwrap();
    assert_eq!(view.total, 7);
    assert_eq!(view.booked.len(), 2);
    assert_eq!(view.options.bookings, vec!["BK-2026-002".to_string()]);
}

#[tokio::test]
async fn test_find_by_code_refreshes_days() {
    let record = seeded_service()
        .find_by_code("  SEDU5544332 ")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.days_in_status, Some(45));
    assert!(!alpha().can_view(&record));
}

#[tokio::test]
async fn test_single_status_is_pushed_down() {
    let mut source = MockInventory::new();
    source.expect_name().return_const("mock");
    source
        .expect_fetch_candidates()
        .withf(|query| {
            query.client.as_deref() == Some("Empresa Alpha")
                && query.status.as_deref() == Some(REPAIR)
                && query.search.as_deref() == Some("hex")
        })
        .times(1)
        .returning(|_| {
            Ok(vec![ContainerRecordBuilder::new("EXFU7711223")
                .with_status(REPAIR)
                .with_product("Hexano")
                .build()])
        });
    source.expect_fetch_status_catalog().returning(|| Ok(vec![REPAIR.to_string()]));

    let service = InventoryService::new(Arc::new(source), ReportSettings::default())
        .with_clock(Arc::new(FixedClock::on(today())));
    let query = InventoryQuery {
        search: Some("  hex ".to_string()),
        status: Some(REPAIR.to_string()),
        ..Default::default()
    };
    let view = service.inventory_page(&alpha(), &query).await.unwrap();
    assert_eq!(view.page.total_count, 1);
}

#[tokio::test]
async fn test_duplicate_and_blank_codes_are_dropped() {
    let records = vec![
        ContainerRecordBuilder::new("DHDU1274480").build(),
        ContainerRecordBuilder::new("DHDU1274480").with_client("Other").build(),
        ContainerRecordBuilder::new("  ").build(),
    ];
    let service = InventoryService::new(Arc::new(MockInventory::returning(records)), ReportSettings::default())
        .with_clock(Arc::new(FixedClock::on(today())));
    let dashboard = service.dashboard(&CallerScope::Admin).await.unwrap();
    assert_eq!(dashboard.total, 1);
}

#[tokio::test]
async fn test_unavailable_source_is_not_an_empty_result() {
    let mut source = MockInventory::new();
    source.expect_name().return_const("mock");
    source
        .expect_fetch_candidates()
        .returning(|_| Err(SourceError::unavailable("connection refused")));

    let service = InventoryService::new(Arc::new(source), ReportSettings::default());
    let err = service.dashboard(&CallerScope::Admin).await.unwrap_err();
    assert!(matches!(err, PortalError::Source(_)));
    assert!(err.is_unavailable());
}
