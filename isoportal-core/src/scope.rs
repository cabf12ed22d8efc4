//! Caller scoping and the in-memory filter stage
//!
//! A request is split into two stages: a narrow pushdown query handed to the
//! inventory source ([`CandidateQuery`]) and a [`ResidualFilter`] applied to
//! whatever the source returns. The two are never assumed interchangeable.

use chrono::{Duration, NaiveDate};
use isoportal_api_types::status::status_eq;
use isoportal_api_types::ContainerRecord;
use isoportal_interfaces::CandidateQuery;
use serde::{Deserialize, Serialize};

/// Authorization context of the caller, computed once per request by the
/// auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "client", rename_all = "lowercase")]
pub enum CallerScope {
    /// Sees every client's records
    Admin,
    /// Bound to one client's records
    Client(String),
}

impl CallerScope {
    pub fn is_admin(&self) -> bool {
        matches!(self, CallerScope::Admin)
    }

    /// The caller's own client, `None` for admins
    pub fn own_client(&self) -> Option<&str> {
        match self {
            CallerScope::Admin => None,
            CallerScope::Client(client) => Some(client),
        }
    }

    /// Client filter to use for a request.
    ///
    /// Admins may narrow to any client; a blank request means all clients.
    /// Client callers always get their own client and the requested value is
    /// discarded.
    pub fn effective_client(&self, requested: Option<&str>) -> Option<String> {
        match self {
            CallerScope::Admin => requested
                .map(str::trim)
                .filter(|client| !client.is_empty())
                .map(str::to_string),
            CallerScope::Client(client) => Some(client.clone()),
        }
    }

    /// Whether a record fetched by code may be shown to this caller
    pub fn can_view(&self, record: &ContainerRecord) -> bool {
        match self {
            CallerScope::Admin => true,
            CallerScope::Client(client) => record.client == *client,
        }
    }
}

/// Query parameters for inventory list requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQuery {
    pub search: Option<String>,
    pub client: Option<String>,
    /// One or more statuses, comma-separated
    pub status: Option<String>,
    /// Keep only releases within this many days from today
    pub upcoming: Option<i64>,
    pub sort_by: Option<String>,
    pub ascending: Option<bool>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl InventoryQuery {
    /// Distinct, trimmed, non-empty status values in request order
    pub fn status_values(&self) -> Vec<String> {
        parse_status_values(self.status.as_deref())
    }

    pub fn search_text(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
            .map(str::to_string)
    }
}

/// Split a comma-joined status value, trimming and dropping empties
pub fn parse_status_values(raw: Option<&str>) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for value in raw.unwrap_or_default().split(',').map(str::trim) {
        if !value.is_empty() && !values.iter().any(|seen| seen == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Filters applied in memory after the fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualFilter {
    /// Status membership filter; only set for two or more values
    pub statuses: Vec<String>,
    /// Release date within `[today, today + N]`
    pub upcoming_within_days: Option<i64>,
}

impl ResidualFilter {
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.upcoming_within_days.is_none()
    }

    pub fn matches(&self, record: &ContainerRecord, today: NaiveDate) -> bool {
        if !self.statuses.is_empty()
            && !self.statuses.iter().any(|status| status_eq(&record.status, status))
        {
            return false;
        }
        if let Some(days) = self.upcoming_within_days {
            return releases_within(record, today, days);
        }
        true
    }

    /// Keep matching records, preserving their relative order
    pub fn apply(&self, mut records: Vec<ContainerRecord>, today: NaiveDate) -> Vec<ContainerRecord> {
        if !self.is_empty() {
            records.retain(|record| self.matches(record, today));
        }
        records
    }
}

/// `date` shifted by `days`, or `None` when that leaves chrono's date range
pub fn offset_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Whether the expected release falls in `[today, today + days]`.
/// A window reaching past the last representable date has no upper bound.
pub fn releases_within(record: &ContainerRecord, today: NaiveDate, days: i64) -> bool {
    let until = offset_date(today, days);
    record
        .expected_release_at
        .is_some_and(|release| release >= today && until.is_none_or(|until| release <= until))
}

/// Pushdown query plus residual filter for one inventory request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    pub fetch: CandidateQuery,
    pub residual: ResidualFilter,
}

impl QueryPlan {
    pub fn build(scope: &CallerScope, query: &InventoryQuery) -> Self {
        let statuses = query.status_values();
        let mut fetch = CandidateQuery {
            client: scope.effective_client(query.client.as_deref()),
            status: None,
            search: query.search_text(),
        };
        let mut residual = ResidualFilter {
            statuses: Vec::new(),
            upcoming_within_days: query.upcoming.filter(|days| *days > 0),
        };

        match statuses.len() {
            0 => {}
            1 => fetch.status = statuses.into_iter().next(),
            _ => residual.statuses = statuses,
        }

        Self { fetch, residual }
    }
}
