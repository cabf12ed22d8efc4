//! Export row assembly
//!
//! Spreadsheet, PDF and delimited-text exports must agree on column identity
//! and order. This module produces typed cells in that order; each target
//! then renders them with its own null placeholder.

use chrono::{NaiveDate, NaiveDateTime};
use isoportal_api_types::ContainerRecord;
use serde::{Deserialize, Serialize};

use crate::scope::CallerScope;

pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Columns of an inventory export, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportColumn {
    Code,
    Product,
    Client,
    Status,
    ExpectedRelease,
    DaysInStatus,
}

pub const INVENTORY_COLUMNS: [ExportColumn; 6] = [
    ExportColumn::Code,
    ExportColumn::Product,
    ExportColumn::Client,
    ExportColumn::Status,
    ExportColumn::ExpectedRelease,
    ExportColumn::DaysInStatus,
];

impl ExportColumn {
    pub fn header(&self) -> &'static str {
        match self {
            ExportColumn::Code => "Code",
            ExportColumn::Product => "Product",
            ExportColumn::Client => "Client",
            ExportColumn::Status => "Status",
            ExportColumn::ExpectedRelease => "Expected release",
            ExportColumn::DaysInStatus => "Days in status",
        }
    }

    pub fn cell(&self, record: &ContainerRecord) -> ExportCell {
        match self {
            ExportColumn::Code => ExportCell::Text(Some(record.code.clone())),
            ExportColumn::Product => ExportCell::Text(record.product.clone()),
            ExportColumn::Client => ExportCell::Text(Some(record.client.clone())),
            ExportColumn::Status => ExportCell::Text(Some(record.status.clone())),
            ExportColumn::ExpectedRelease => ExportCell::Date(record.expected_release_at),
            ExportColumn::DaysInStatus => ExportCell::Integer(record.days_in_status),
        }
    }
}

/// Placeholder a target uses for missing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPlaceholder {
    #[default]
    Dash,
    Empty,
}

impl NullPlaceholder {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullPlaceholder::Dash => "–",
            NullPlaceholder::Empty => "",
        }
    }
}

/// One typed export value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ExportCell {
    Text(Option<String>),
    Date(Option<NaiveDate>),
    Integer(Option<i64>),
}

impl ExportCell {
    pub fn is_null(&self) -> bool {
        match self {
            ExportCell::Text(value) => value.is_none(),
            ExportCell::Date(value) => value.is_none(),
            ExportCell::Integer(value) => value.is_none(),
        }
    }

    pub fn render(&self, placeholder: NullPlaceholder) -> String {
        match self {
            ExportCell::Text(Some(text)) => text.clone(),
            ExportCell::Date(Some(date)) => date.format(DATE_FORMAT).to_string(),
            ExportCell::Integer(Some(value)) => value.to_string(),
            _ => placeholder.as_str().to_string(),
        }
    }
}

/// Typed cells for each record, in [`INVENTORY_COLUMNS`] order
pub fn assemble_rows(records: &[ContainerRecord]) -> Vec<Vec<ExportCell>> {
    records
        .iter()
        .map(|record| INVENTORY_COLUMNS.iter().map(|column| column.cell(record)).collect())
        .collect()
}

/// A rendered export ready for a byte-level writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn inventory(title: impl Into<String>, records: &[ContainerRecord], placeholder: NullPlaceholder) -> Self {
        Self {
            title: title.into(),
            headers: INVENTORY_COLUMNS.iter().map(|c| c.header().to_string()).collect(),
            rows: assemble_rows(records)
                .into_iter()
                .map(|cells| cells.iter().map(|cell| cell.render(placeholder)).collect())
                .collect(),
        }
    }
}

/// Heading identifying whose stock an export covers
pub fn scope_title(scope: &CallerScope) -> String {
    match scope {
        CallerScope::Admin => "Todos os clientes".to_string(),
        CallerScope::Client(client) => format!("Seu estoque ({})", client),
    }
}

fn date_time_or_dash(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| NullPlaceholder::Dash.as_str().to_string())
}

/// Field/value pairs for a single-record export
pub fn detail_rows(record: &ContainerRecord) -> Vec<(&'static str, String)> {
    let dash = NullPlaceholder::Dash;
    let text = |value: &Option<String>| ExportCell::Text(value.clone()).render(dash);
    vec![
        ("Code", record.code.clone()),
        ("Product", text(&record.product)),
        ("Client", record.client.clone()),
        ("Status", record.status.clone()),
        ("Days in status", ExportCell::Integer(record.days_in_status).render(dash)),
        ("Expected release", ExportCell::Date(record.expected_release_at).render(dash)),
        ("Unloaded at yard", date_time_or_dash(record.unloaded_at_yard_at)),
        ("Loaded on vehicle", date_time_or_dash(record.loaded_on_vehicle_at)),
        ("Vehicle plate", text(&record.vehicle_plate)),
        ("Expected terminal arrival", date_time_or_dash(record.expected_terminal_arrival_at)),
    ]
}
