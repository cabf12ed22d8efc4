//! Contact page, contact form and stored contact settings

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use isoportal_core::contact::{normalize_code, ContactRequest};
use isoportal_interfaces::ContactSettings;
use isoportal_web::{ApiResponse, Caller, OptionalCaller, QueryParams, WebError};
use tracing::info;

use crate::{
    context::AppContext,
    errors::RestResult,
    models::{ContactPageResponse, ContactQuery, ContactSentResponse},
};

/// Public contact details; open to anonymous visitors
pub async fn get_contact(
    State(ctx): State<AppContext>,
    QueryParams(query): QueryParams<ContactQuery>,
) -> RestResult<impl IntoResponse> {
    let info = ctx.contact.info().await?;
    Ok(ApiResponse::new(ContactPageResponse {
        info,
        code: normalize_code(query.code.as_deref()),
    }))
}

/// Send a contact form message through the mail sink
pub async fn send_contact(
    State(ctx): State<AppContext>,
    caller: OptionalCaller,
    Json(request): Json<ContactRequest>,
) -> RestResult<impl IntoResponse> {
    info!(code = ?request.code, anonymous = caller.0.is_none(), "Contact form submitted");

    ctx.contact.send(&request, &caller.sender()).await?;
    Ok((StatusCode::ACCEPTED, ApiResponse::new(ContactSentResponse { sent: true })))
}

fn validate_email(field: &str, value: &Option<String>) -> Result<(), WebError> {
    match value.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() && !email.contains('@') => Err(WebError::validation_single(
            Some(field.to_string()),
            format!("'{}' is not an e-mail address", email),
        )),
        _ => Ok(()),
    }
}

/// Stored settings with the password masked (admins only)
pub async fn get_contact_settings(State(ctx): State<AppContext>, caller: Caller) -> RestResult<impl IntoResponse> {
    caller.require_admin()?;

    let settings = ctx.contact.stored_settings().await?;
    Ok(ApiResponse::new(settings))
}

/// Replace the stored settings; an empty password keeps the current one
pub async fn update_contact_settings(
    State(ctx): State<AppContext>,
    caller: Caller,
    Json(settings): Json<ContactSettings>,
) -> RestResult<impl IntoResponse> {
    caller.require_admin()?;
    validate_email("destinationEmail", &settings.destination_email)?;
    validate_email("fromEmail", &settings.from_email)?;

    info!(author = %caller.author(), "Updating contact settings");
    let saved = ctx.contact.update_settings(settings).await?;
    Ok(ApiResponse::new(saved))
}
