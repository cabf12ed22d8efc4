//! Inventory, container detail, notes and documents

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use isoportal_api_types::{ContainerRecord, Observation, PaginationMeta};
use isoportal_core::export::{detail_rows, NullPlaceholder};
use isoportal_core::report::ContainerDetail;
use isoportal_core::{InventoryQuery, PortalError};
use isoportal_web::{file_download, ApiResponse, Caller, ExportFormat, ExportQuery, QueryParams, RequestId, WebError};
use tracing::{info, warn};

use crate::{
    context::AppContext,
    errors::{RestError, RestResult},
    export::{detail_csv, table_csv, CSV_CONTENT_TYPE},
    models::{DocumentsQuery, NewObservationRequest},
};

/// Fetch a record by code and check that the caller may see it
async fn visible_record(ctx: &AppContext, caller: &Caller, code: &str) -> RestResult<ContainerRecord> {
    let code = code.trim();
    let record = ctx
        .inventory
        .find_by_code(code)
        .await?
        .ok_or_else(|| RestError::not_found(code))?;

    if !caller.scope.can_view(&record) {
        warn!(%code, scope = ?caller.scope, "Client asked for another client's isotank");
        return Err(RestError::forbidden("This isotank belongs to another client"));
    }
    Ok(record)
}

/// Filtered, sorted, paged inventory with summary cards
pub async fn list_inventory(
    State(ctx): State<AppContext>,
    caller: Caller,
    request_id: RequestId,
    QueryParams(query): QueryParams<InventoryQuery>,
) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, ?query, "Listing inventory");

    let view = ctx.inventory.inventory_page(&caller.scope, &query).await?;
    let pagination = PaginationMeta::new(view.page.page, view.page.page_size, view.page.total_count as u64);

    Ok(ApiResponse::with_pagination(view, pagination).request_id(request_id.as_str()))
}

/// The inventory list, unpaged, as CSV or JSON rows
pub async fn export_inventory(
    State(ctx): State<AppContext>,
    caller: Caller,
    QueryParams(query): QueryParams<InventoryQuery>,
    QueryParams(export): QueryParams<ExportQuery>,
) -> RestResult<Response> {
    info!(scope = ?caller.scope, format = ?export.format, "Exporting inventory");

    match export.format {
        ExportFormat::Csv => {
            let table = ctx
                .inventory
                .inventory_export(&caller.scope, &query, NullPlaceholder::Dash)
                .await?;
            Ok(file_download(table_csv(&table)?, CSV_CONTENT_TYPE, "estoque_isotanks.csv"))
        }
        ExportFormat::Json => {
            let table = ctx
                .inventory
                .inventory_export(&caller.scope, &query, NullPlaceholder::Empty)
                .await?;
            Ok(ApiResponse::new(table).into_response())
        }
    }
}

/// One container with its internal notes
pub async fn get_container(
    State(ctx): State<AppContext>,
    caller: Caller,
    Path(code): Path<String>,
) -> RestResult<impl IntoResponse> {
    info!(%code, "Getting isotank detail");

    let record = visible_record(&ctx, &caller, &code).await?;
    let observations = ctx
        .observations
        .list_for(&record.code)
        .await
        .map_err(PortalError::from)?;

    Ok(ApiResponse::new(ContainerDetail { record, observations }))
}

/// Field/value CSV of one container
pub async fn export_container(
    State(ctx): State<AppContext>,
    caller: Caller,
    Path(code): Path<String>,
) -> RestResult<Response> {
    info!(%code, "Exporting isotank detail");

    let record = visible_record(&ctx, &caller, &code).await?;
    let bytes = detail_csv(&detail_rows(&record))?;
    Ok(file_download(bytes, CSV_CONTENT_TYPE, &format!("isotank_{}.csv", record.code)))
}

/// Append an internal note to a container (admins only)
pub async fn add_observation(
    State(ctx): State<AppContext>,
    caller: Caller,
    Path(code): Path<String>,
    Json(body): Json<NewObservationRequest>,
) -> RestResult<impl IntoResponse> {
    caller.require_admin()?;

    let text = body.text.trim();
    if text.is_empty() {
        return Err(WebError::validation_single(Some("text".to_string()), "Observation text must not be empty").into());
    }

    let record = visible_record(&ctx, &caller, &code).await?;
    let observation = Observation::new(record.code, text, caller.author(), ctx.clock.now());
    let saved = ctx.observations.append(observation).await.map_err(PortalError::from)?;
    info!(code = %saved.container_code, author = %saved.author, "Observation recorded");

    Ok((StatusCode::CREATED, ApiResponse::new(saved)))
}

/// Document links for the caller's containers
pub async fn list_documents(
    State(ctx): State<AppContext>,
    caller: Caller,
    QueryParams(query): QueryParams<DocumentsQuery>,
) -> RestResult<impl IntoResponse> {
    info!(scope = ?caller.scope, search = ?query.search, "Listing documents");

    let documents = ctx.inventory.documents(&caller.scope, query.search.as_deref()).await?;
    Ok(ApiResponse::new(documents))
}
