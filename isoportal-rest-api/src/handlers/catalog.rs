//! Client and status catalogs

use axum::{extract::State, response::IntoResponse};
use isoportal_web::{ApiResponse, Caller};

use crate::{context::AppContext, errors::RestResult};

/// Distinct client names (admins only)
pub async fn list_clients(State(ctx): State<AppContext>, caller: Caller) -> RestResult<impl IntoResponse> {
    caller.require_admin()?;

    let clients = ctx.inventory.clients().await?;
    Ok(ApiResponse::new(clients))
}

pub async fn list_statuses(State(ctx): State<AppContext>, _caller: Caller) -> RestResult<impl IntoResponse> {
    let statuses = ctx.inventory.status_catalog().await?;
    Ok(ApiResponse::new(statuses))
}
