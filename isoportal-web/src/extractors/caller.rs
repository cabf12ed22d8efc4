//! Caller identity extractors
//!
//! Identity arrives as trusted headers set by the fronting auth proxy. The
//! extractor turns them into a [`CallerScope`] once per request.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use isoportal_core::contact::Sender;
use isoportal_core::CallerScope;
use tracing::debug;

use crate::errors::WebError;

pub const ROLE_HEADER: &str = "X-Portal-Role";
pub const CLIENT_HEADER: &str = "X-Portal-Client";
pub const USER_HEADER: &str = "X-Portal-User";
pub const EMAIL_HEADER: &str = "X-Portal-Email";

// Client names carry accents, so values are read as UTF-8 rather than ASCII
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub scope: CallerScope,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Caller {
    pub fn admin() -> Self {
        Self {
            scope: CallerScope::Admin,
            name: None,
            email: None,
        }
    }

    pub fn client(client: impl Into<String>) -> Self {
        Self {
            scope: CallerScope::Client(client.into()),
            name: None,
            email: None,
        }
    }

    /// Parse the identity headers. `Ok(None)` means no identity was sent.
    pub fn from_headers(headers: &HeaderMap) -> Result<Option<Self>, WebError> {
        let Some(role) = header_value(headers, ROLE_HEADER) else {
            return Ok(None);
        };

        let scope = match role.to_ascii_lowercase().as_str() {
            "admin" => CallerScope::Admin,
            "client" => match header_value(headers, CLIENT_HEADER) {
                Some(client) => CallerScope::Client(client),
                None => return Err(WebError::forbidden("Client account is not linked to a client")),
            },
            other => return Err(WebError::unauthorized(format!("Unknown role '{}'", other))),
        };

        Ok(Some(Self {
            scope,
            name: header_value(headers, USER_HEADER),
            email: header_value(headers, EMAIL_HEADER),
        }))
    }

    /// Fail with 403 unless the caller is an admin
    pub fn require_admin(&self) -> Result<(), WebError> {
        if self.scope.is_admin() {
            Ok(())
        } else {
            Err(WebError::forbidden("Administrator access required"))
        }
    }

    /// Name recorded on notes written by this caller
    pub fn author(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "admin".to_string())
    }

    pub fn sender(&self) -> Sender {
        Sender {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Caller::from_headers(&parts.headers)? {
            Some(caller) => {
                debug!(scope = ?caller.scope, "Resolved caller");
                Ok(caller)
            }
            None => Err(WebError::unauthorized("Missing caller identity")),
        }
    }
}

/// Caller identity for endpoints open to anonymous visitors
#[derive(Debug, Clone, Default)]
pub struct OptionalCaller(pub Option<Caller>);

impl OptionalCaller {
    pub fn sender(&self) -> Sender {
        self.0.as_ref().map(Caller::sender).unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for OptionalCaller
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalCaller(Caller::from_headers(&parts.headers)?))
    }
}
