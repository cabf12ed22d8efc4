//! Dashboard, alerts, BI and booking reports

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use isoportal_core::export::NullPlaceholder;
use isoportal_core::report::BookingReportQuery;
use isoportal_web::{file_download, ApiResponse, Caller, ExportFormat, ExportQuery, QueryParams};
use tracing::info;

use crate::{
    context::AppContext,
    errors::RestResult,
    export::{table_csv, CSV_CONTENT_TYPE},
    models::{AlertCountResponse, ReportQuery},
};

pub async fn get_dashboard(State(ctx): State<AppContext>, caller: Caller) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, "Building dashboard");

    let dashboard = ctx.inventory.dashboard(&caller.scope).await?;
    Ok(ApiResponse::new(dashboard))
}

pub async fn get_alerts(State(ctx): State<AppContext>, caller: Caller) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, "Listing alerts");

    let alerts = ctx.inventory.alerts(&caller.scope).await?;
    Ok(ApiResponse::new(alerts))
}

/// Size of the critical set, for the navigation badge
pub async fn get_alert_count(State(ctx): State<AppContext>, caller: Caller) -> RestResult<impl IntoResponse> {
    let count = ctx.inventory.alert_count(&caller.scope).await?;
    Ok(ApiResponse::new(AlertCountResponse { count }))
}

pub async fn get_report(
    State(ctx): State<AppContext>,
    caller: Caller,
    QueryParams(query): QueryParams<ReportQuery>,
) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, client = ?query.client, status = ?query.status, "Building BI report");

    let report = ctx
        .inventory
        .report(&caller.scope, query.client.as_deref(), query.status.as_deref())
        .await?;
    Ok(ApiResponse::new(report))
}

/// The caller's whole inventory sorted by code
pub async fn export_report(
    State(ctx): State<AppContext>,
    caller: Caller,
    QueryParams(export): QueryParams<ExportQuery>,
) -> RestResult<Response> {
    info!(scope = ?caller.scope, format = ?export.format, "Exporting report");

    match export.format {
        ExportFormat::Csv => {
            let table = ctx.inventory.report_export(&caller.scope, NullPlaceholder::Dash).await?;
            Ok(file_download(table_csv(&table)?, CSV_CONTENT_TYPE, "relatorio_isotanks.csv"))
        }
        ExportFormat::Json => {
            let table = ctx.inventory.report_export(&caller.scope, NullPlaceholder::Empty).await?;
            Ok(ApiResponse::new(table).into_response())
        }
    }
}

pub async fn get_booking_report(
    State(ctx): State<AppContext>,
    caller: Caller,
    QueryParams(filters): QueryParams<BookingReportQuery>,
) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, ?filters, "Building booking report");

    let report = ctx.inventory.booking_report(&caller.scope, filters).await?;
    Ok(ApiResponse::new(report))
}
