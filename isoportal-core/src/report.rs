//! Typed view data for each portal screen
//!
//! Every builder here is a pure function of an already-scoped record set,
//! "today" and the report thresholds.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use isoportal_api_types::status::{self, status_eq, AWAITING_ESTIMATE};
use isoportal_api_types::{ContainerRecord, Observation};
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, BookingUtilization, DaysMatrix, LabelCount, MonthlySeries, StockAvailability};
use crate::scope::{offset_date, releases_within};
use crate::settings::ReportSettings;
use crate::sort::{PageResult, SortKey};

// =============================================================================
// Inventory page
// =============================================================================

/// Summary cards computed over the filtered, unpaged inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCards {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub alert_count: usize,
    pub awaiting_action: usize,
    pub upcoming_releases: usize,
}

pub fn inventory_cards(records: &[ContainerRecord], today: NaiveDate, settings: &ReportSettings) -> InventoryCards {
    let by_status = aggregate::status_histogram(records);
    InventoryCards {
        total: by_status.values().sum(),
        by_status,
        alert_count: records
            .iter()
            .filter(|r| r.days_in_status.unwrap_or(0) >= settings.inventory_alert_days)
            .count(),
        awaiting_action: aggregate::count_status(records, AWAITING_ESTIMATE),
        upcoming_releases: records
            .iter()
            .filter(|r| releases_within(r, today, settings.upcoming_window_days))
            .count(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPageView {
    pub page: PageResult<ContainerRecord>,
    pub sort_by: SortKey,
    pub ascending: bool,
    pub selected_statuses: Vec<String>,
    pub upcoming: Option<i64>,
    pub cards: InventoryCards,
    /// Client dropdown; empty for client callers
    pub clients: Vec<String>,
    pub status_catalog: Vec<String>,
}

/// Container detail with its internal notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDetail {
    pub record: ContainerRecord,
    pub observations: Vec<Observation>,
}

/// Document links for one container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEntry {
    pub code: String,
    pub client: String,
    pub product: Option<String>,
    pub inspection_report_url: Option<String>,
    pub cleaning_certificate_url: Option<String>,
}

impl From<&ContainerRecord> for DocumentEntry {
    fn from(record: &ContainerRecord) -> Self {
        Self {
            code: record.code.clone(),
            client: record.client.clone(),
            product: record.product.clone(),
            inspection_report_url: record.inspection_report_url.clone(),
            cleaning_certificate_url: record.cleaning_certificate_url.clone(),
        }
    }
}

// =============================================================================
// Dashboard
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTotal {
    pub client: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewData {
    pub total: usize,
    /// Canonical statuses in catalog order, zero when absent
    pub status_counts: Vec<LabelCount>,
    pub stuck_count: usize,
    pub upcoming_release_count: usize,
    pub upcoming_releases: Vec<ContainerRecord>,
    pub products: Vec<LabelCount>,
    /// Present for admins only
    pub per_client: Option<Vec<ClientTotal>>,
    pub availability: StockAvailability,
}

pub fn dashboard(
    records: &[ContainerRecord],
    include_clients: bool,
    today: NaiveDate,
    settings: &ReportSettings,
) -> DashboardViewData {
    let mut upcoming: Vec<&ContainerRecord> = records
        .iter()
        .filter(|r| releases_within(r, today, settings.upcoming_window_days))
        .collect();
    let upcoming_release_count = upcoming.len();
    upcoming.sort_by_key(|r| r.expected_release_at);

    let per_client = include_clients.then(|| {
        aggregate::client_histogram(records)
            .into_iter()
            .map(|(client, total)| ClientTotal { client, total })
            .collect()
    });

    DashboardViewData {
        total: records.len(),
        status_counts: status::CATALOG
            .iter()
            .map(|s| LabelCount {
                label: s.to_string(),
                count: aggregate::count_status(records, s),
            })
            .collect(),
        stuck_count: records
            .iter()
            .filter(|r| r.days_in_status.unwrap_or(0) >= settings.stuck_threshold_days)
            .count(),
        upcoming_release_count,
        upcoming_releases: upcoming
            .into_iter()
            .take(settings.top_upcoming)
            .cloned()
            .collect(),
        products: aggregate::ranked_counts(aggregate::group_counts(records, aggregate::product_bucket)),
        per_client,
        availability: aggregate::stock_availability(records),
    }
}

// =============================================================================
// Alerts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertsViewData {
    pub stuck: Vec<ContainerRecord>,
    pub due_releases: Vec<ContainerRecord>,
    pub critical_total: usize,
}

pub fn alerts(records: &[ContainerRecord], today: NaiveDate, settings: &ReportSettings) -> AlertsViewData {
    AlertsViewData {
        stuck: aggregate::stuck_records(records, settings.stuck_threshold_days)
            .into_iter()
            .cloned()
            .collect(),
        due_releases: aggregate::due_releases(records, settings.critical_window_days, today)
            .into_iter()
            .cloned()
            .collect(),
        critical_total: critical_total(records, today, settings),
    }
}

pub fn critical_total(records: &[ContainerRecord], today: NaiveDate, settings: &ReportSettings) -> usize {
    aggregate::critical_set(
        records,
        settings.stuck_threshold_days,
        settings.critical_window_days,
        today,
    )
    .len()
}

// =============================================================================
// BI report
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongestStay {
    pub code: String,
    pub client: String,
    pub days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportViewData {
    pub client_filter: Option<String>,
    pub status_filter: Option<String>,
    pub total: usize,
    pub totals_by_status: BTreeMap<String, usize>,
    pub totals_by_client: BTreeMap<String, usize>,
    pub average_days_by_status: BTreeMap<String, f64>,
    pub longest_stay: Option<LongestStay>,
    pub overall_average_days: f64,
    pub entries: MonthlySeries,
    pub exits: MonthlySeries,
    pub repair_ratio: f64,
    pub releases_this_month: usize,
    pub matrix: DaysMatrix,
}

pub fn bi_report(
    records: &[ContainerRecord],
    client_filter: Option<String>,
    status_filter: Option<String>,
    today: NaiveDate,
    settings: &ReportSettings,
) -> ReportViewData {
    let totals_by_client = aggregate::client_histogram(records);
    let clients: Vec<String> = totals_by_client.keys().cloned().collect();

    ReportViewData {
        client_filter,
        status_filter,
        total: records.len(),
        totals_by_status: aggregate::group_counts(records, |r| r.status_trimmed().to_string()),
        average_days_by_status: aggregate::average_days_by_status(records),
        longest_stay: aggregate::extremes(records).map(|r| LongestStay {
            code: r.code.clone(),
            client: r.client.clone(),
            days: r.days_in_status.unwrap_or(0),
        }),
        overall_average_days: aggregate::overall_average_days(records),
        entries: aggregate::monthly_movement_series(records, settings.months_back, today, |r| {
            r.unloaded_at_yard_at.map(|ts| ts.date())
        }),
        exits: aggregate::monthly_movement_series(records, settings.months_back, today, |r| {
            r.loaded_on_vehicle_at.map(|ts| ts.date())
        }),
        repair_ratio: aggregate::repair_ratio(records),
        releases_this_month: aggregate::releases_in_month(records, today),
        matrix: aggregate::average_days_matrix(records, &clients, &status::REPORT_ORDER),
        totals_by_client,
    }
}

// =============================================================================
// Booking report
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReportQuery {
    pub period_days: Option<i64>,
    pub booking: Option<String>,
    pub product: Option<String>,
    pub status: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl BookingReportQuery {
    pub fn matches(&self, record: &ContainerRecord, today: NaiveDate) -> bool {
        if let Some(days) = self.period_days.filter(|d| *d > 0) {
            let since = offset_date(today, -days);
            let reference = record
                .exited_at
                .map(|ts| ts.date())
                .or(record.expected_release_at);
            if !reference.is_some_and(|date| since.is_none_or(|since| date >= since)) {
                return false;
            }
        }
        if let Some(booking) = non_blank(&self.booking) {
            if record.booking() != Some(booking) {
                return false;
            }
        }
        if let Some(product) = non_blank(&self.product) {
            if record.product.as_deref().unwrap_or_default() != product {
                return false;
            }
        }
        if let Some(wanted) = non_blank(&self.status) {
            if !status_eq(&record.status, wanted) {
                return false;
            }
        }
        true
    }
}

/// Dropdown options, computed before any booking filter is applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilterOptions {
    pub bookings: Vec<String>,
    pub statuses: Vec<String>,
    pub products: Vec<String>,
}

impl BookingFilterOptions {
    pub fn from_records(records: &[ContainerRecord]) -> Self {
        let distinct = |values: Vec<String>| -> Vec<String> {
            let set: std::collections::BTreeSet<String> = values.into_iter().collect();
            set.into_iter().collect()
        };
        Self {
            bookings: distinct(records.iter().filter_map(|r| r.booking()).map(str::to_string).collect()),
            statuses: distinct(
                records
                    .iter()
                    .map(|r| r.status_trimmed().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
            products: distinct(records.iter().map(aggregate::product_bucket).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReportViewData {
    pub options: BookingFilterOptions,
    pub filters: BookingReportQuery,
    pub total: usize,
    pub utilization: BookingUtilization,
    pub booked: Vec<ContainerRecord>,
    pub booked_by_product: Vec<LabelCount>,
    pub bookings_per_month: MonthlySeries,
}

pub fn booking_report(
    records: &[ContainerRecord],
    filters: BookingReportQuery,
    today: NaiveDate,
    settings: &ReportSettings,
) -> BookingReportViewData {
    let options = BookingFilterOptions::from_records(records);
    let filtered: Vec<ContainerRecord> = records
        .iter()
        .filter(|r| filters.matches(r, today))
        .cloned()
        .collect();
    let booked: Vec<ContainerRecord> = filtered.iter().filter(|r| r.has_booking()).cloned().collect();

    BookingReportViewData {
        options,
        total: filtered.len(),
        utilization: aggregate::booking_utilization(&filtered),
        booked_by_product: aggregate::ranked_counts(aggregate::group_counts(&booked, aggregate::product_bucket)),
        bookings_per_month: aggregate::monthly_distinct_bookings(&booked, settings.months_back, today),
        booked,
        filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 19)
    }

    fn rec(code: &str, client: &str, status: &str, days: Option<i64>, release: Option<NaiveDate>) -> ContainerRecord {
        ContainerRecord {
            code: code.to_string(),
            client: client.to_string(),
            status: status.to_string(),
            days_in_status: days,
            expected_release_at: release,
            ..Default::default()
        }
    }

    #[test]
    fn test_inventory_cards() {
        let records = vec![
            rec("A", "X", status::AWAITING_ESTIMATE, Some(15), Some(today())),
            rec("B", "X", "", Some(14), Some(date(2026, 10, 27))),
            rec("C", "X", status::REPAIR, None, Some(date(2026, 10, 26))),
        ];
        let cards = inventory_cards(&records, today(), &ReportSettings::default());
        assert_eq!(cards.total, 3);
        assert_eq!(cards.alert_count, 1);
        assert_eq!(cards.awaiting_action, 1);
        assert_eq!(cards.upcoming_releases, 2);
        assert_eq!(cards.by_status.get(status::BLANK_STATUS_LABEL), Some(&1));
    }

    #[test]
    fn test_dashboard_counts_and_upcoming_top() {
        let mut records: Vec<ContainerRecord> = (0..7)
            .map(|i| {
                rec(
                    &format!("U{}", i),
                    if i % 2 == 0 { "Alpha" } else { "Beta" },
                    status::CLEANING,
                    Some(i),
                    Some(today() + Duration::days(6 - i)),
                )
            })
            .collect();
        records.push(rec("S", "Alpha", status::OFF_HIRE, Some(40), None));

        let view = dashboard(&records, true, today(), &ReportSettings::default());
        assert_eq!(view.total, 8);
        assert_eq!(view.stuck_count, 1);
        assert_eq!(view.upcoming_release_count, 7);
        let top: Vec<&str> = view.upcoming_releases.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(top, vec!["U6", "U5", "U4", "U3", "U2"]);
        assert_eq!(view.status_counts[0], LabelCount { label: status::OFF_HIRE.into(), count: 1 });
        assert_eq!(view.products, vec![LabelCount { label: status::BLANK_PRODUCT_LABEL.into(), count: 8 }]);
        assert_eq!(
            view.per_client.unwrap(),
            vec![
                ClientTotal { client: "Alpha".into(), total: 5 },
                ClientTotal { client: "Beta".into(), total: 3 },
            ]
        );
        assert_eq!(view.availability.maintenance, 7);
        assert_eq!(view.availability.available, 1);

        let client_view = dashboard(&records, false, today(), &ReportSettings::default());
        assert!(client_view.per_client.is_none());
    }

    #[test]
    fn test_alerts_union_counts_codes_once() {
        let records = vec![
            rec("A", "X", "", Some(20), Some(date(2026, 10, 1))),
            rec("B", "X", "", Some(2), Some(date(2026, 10, 22))),
            rec("C", "X", "", Some(11), None),
            rec("D", "X", "", None, Some(date(2026, 11, 1))),
        ];
        let view = alerts(&records, today(), &ReportSettings::default());
        let stuck: Vec<&str> = view.stuck.iter().map(|r| r.code.as_str()).collect();
        let due: Vec<&str> = view.due_releases.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(stuck, vec!["A", "C"]);
        assert_eq!(due, vec!["A", "B"]);
        assert_eq!(view.critical_total, 3);
    }

    #[test]
    fn test_bi_report_on_empty_set() {
        let view = bi_report(&[], None, None, today(), &ReportSettings::default());
        assert_eq!(view.total, 0);
        assert_eq!(view.repair_ratio, 0.0);
        assert_eq!(view.overall_average_days, 0.0);
        assert!(view.longest_stay.is_none());
        assert_eq!(view.entries.counts, vec![0; 6]);
        assert!(view.matrix.rows.is_empty());
        assert_eq!(view.matrix.statuses.len(), 5);
    }

    #[test]
    fn test_bi_report_longest_stay_and_matrix_clients() {
        let records = vec![
            rec("A", "Química Beta", status::REPAIR, Some(8), Some(date(2026, 10, 30))),
            rec("B", "DEN HARTOGH", status::CLEANING, Some(30), None),
            rec("C", "Empresa Alpha", status::REPAIR, Some(30), Some(date(2026, 11, 2))),
        ];
        let view = bi_report(&records, None, None, today(), &ReportSettings::default());
        assert_eq!(
            view.longest_stay,
            Some(LongestStay { code: "B".into(), client: "DEN HARTOGH".into(), days: 30 })
        );
        let clients: Vec<&str> = view.matrix.rows.iter().map(|r| r.client.as_str()).collect();
        assert_eq!(clients, vec!["DEN HARTOGH", "Empresa Alpha", "Química Beta"]);
        assert_eq!(view.repair_ratio, 66.7);
        assert_eq!(view.releases_this_month, 1);
    }

    #[test]
    fn test_booking_report_options_precede_filters() {
        let mut a = rec("A", "X", status::OFF_HIRE, None, Some(date(2026, 10, 10)));
        a.booking_number = Some("BK1".into());
        a.product = Some("Etanol".into());
        let mut b = rec("B", "X", status::REPAIR, None, Some(date(2026, 6, 1)));
        b.booking_number = Some("BK2".into());
        let c = rec("C", "X", status::CLEANING, None, None);

        let filters = BookingReportQuery {
            period_days: Some(30),
            ..Default::default()
        };
        let view = booking_report(&[a, b, c], filters, today(), &ReportSettings::default());
        assert_eq!(view.options.bookings, vec!["BK1", "BK2"]);
        assert_eq!(view.options.products, vec![status::BLANK_PRODUCT_LABEL, "Etanol"]);
        assert_eq!(view.total, 1);
        assert_eq!(view.utilization.active_booking_count, 1);
        assert_eq!(view.booked_by_product, vec![LabelCount { label: "Etanol".into(), count: 1 }]);
        assert_eq!(view.bookings_per_month.counts, vec![0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_booking_period_prefers_exit_date() {
        let mut record = rec("A", "X", status::OFF_HIRE, None, Some(date(2026, 1, 1)));
        record.exited_at = date(2026, 10, 15).and_hms_opt(10, 0, 0);
        let query = BookingReportQuery {
            period_days: Some(7),
            ..Default::default()
        };
        assert!(query.matches(&record, today()));
        record.exited_at = None;
        assert!(!query.matches(&record, today()));
    }

    #[test]
    fn test_booking_period_beyond_calendar_keeps_dated_records() {
        let dated = rec("A", "X", status::OFF_HIRE, None, Some(date(1990, 1, 1)));
        let undated = rec("B", "X", status::OFF_HIRE, None, None);
        let query = BookingReportQuery {
            period_days: Some(i64::MAX),
            ..Default::default()
        };
        assert!(query.matches(&dated, today()));
        assert!(!query.matches(&undated, today()));
    }
}
