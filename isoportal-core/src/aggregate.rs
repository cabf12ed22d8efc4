//! Aggregation and reporting functions
//!
//! All functions are total over their input: empty or degenerate record sets
//! produce empty maps and zero scalars, never errors. Inputs are expected to
//! be already scoped and filtered.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use isoportal_api_types::status::{self, status_eq, status_in, BLANK_PRODUCT_LABEL, BLANK_STATUS_LABEL};
use isoportal_api_types::ContainerRecord;
use serde::{Deserialize, Serialize};

use crate::scope::offset_date;

/// Round half to even at one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

fn average(values: impl Iterator<Item = i64>) -> Option<f64> {
    let (sum, count) = values.fold((0i64, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

// =============================================================================
// Grouping
// =============================================================================

/// Count records per key
pub fn group_counts<K, F>(records: &[ContainerRecord], key_fn: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&ContainerRecord) -> K,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(key_fn(record)).or_insert(0) += 1;
    }
    counts
}

/// Status key with blank statuses folded into a placeholder bucket
pub fn status_bucket(record: &ContainerRecord) -> String {
    let status = record.status_trimmed();
    if status.is_empty() {
        BLANK_STATUS_LABEL.to_string()
    } else {
        status.to_string()
    }
}

pub fn product_bucket(record: &ContainerRecord) -> String {
    record
        .product
        .clone()
        .unwrap_or_else(|| BLANK_PRODUCT_LABEL.to_string())
}

pub fn status_histogram(records: &[ContainerRecord]) -> BTreeMap<String, usize> {
    group_counts(records, status_bucket)
}

pub fn client_histogram(records: &[ContainerRecord]) -> BTreeMap<String, usize> {
    group_counts(records, |record| record.client.clone())
}

/// Named count, used for ranked chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Counts ordered by count descending, then label
pub fn ranked_counts(counts: BTreeMap<String, usize>) -> Vec<LabelCount> {
    let mut ranked: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    // BTreeMap iteration is already label-ordered; the stable sort keeps it for ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Count of records whose status exactly matches `wanted`
pub fn count_status(records: &[ContainerRecord], wanted: &str) -> usize {
    records.iter().filter(|r| status_eq(&r.status, wanted)).count()
}

// =============================================================================
// Days in status
// =============================================================================

/// Average days in status per status. Statuses without a single record that
/// has a day count are omitted.
pub fn average_days_by_status(records: &[ContainerRecord]) -> BTreeMap<String, f64> {
    let mut grouped: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for record in records {
        if let Some(days) = record.days_in_status {
            grouped.entry(record.status_trimmed().to_string()).or_default().push(days);
        }
    }
    grouped
        .into_iter()
        .filter_map(|(status, days)| average(days.into_iter()).map(|avg| (status, avg)))
        .collect()
}

/// Client x status averages, rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysMatrix {
    /// Column order
    pub statuses: Vec<String>,
    pub rows: Vec<DaysMatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysMatrixRow {
    pub client: String,
    /// One value per status column; 0 where the client has no qualifying record
    pub averages: Vec<f64>,
}

impl DaysMatrix {
    pub fn cell(&self, client: &str, status: &str) -> Option<f64> {
        let column = self.statuses.iter().position(|s| s == status)?;
        self.rows
            .iter()
            .find(|row| row.client == client)
            .and_then(|row| row.averages.get(column).copied())
    }
}

/// Build the client x status matrix over a fixed status column order.
/// Unlike [`average_days_by_status`], missing cells are 0 rather than omitted.
pub fn average_days_matrix(records: &[ContainerRecord], clients: &[String], statuses: &[&str]) -> DaysMatrix {
    let rows = clients
        .iter()
        .map(|client| {
            let averages = statuses
                .iter()
                .map(|wanted| {
                    average(
                        records
                            .iter()
                            .filter(|r| r.client == *client && status_eq(&r.status, wanted))
                            .filter_map(|r| r.days_in_status),
                    )
                    .map(round_to_tenth)
                    .unwrap_or(0.0)
                })
                .collect();
            DaysMatrixRow {
                client: client.clone(),
                averages,
            }
        })
        .collect();

    DaysMatrix {
        statuses: statuses.iter().map(|s| s.to_string()).collect(),
        rows,
    }
}

/// Record with the largest day count; ties go to the first one encountered
pub fn extremes(records: &[ContainerRecord]) -> Option<&ContainerRecord> {
    let mut best: Option<(&ContainerRecord, i64)> = None;
    for record in records {
        if let Some(days) = record.days_in_status {
            if best.is_none_or(|(_, max)| days > max) {
                best = Some((record, days));
            }
        }
    }
    best.map(|(record, _)| record)
}

/// Average day count over records that have one, rounded; 0 when none do
pub fn overall_average_days(records: &[ContainerRecord]) -> f64 {
    average(records.iter().filter_map(|r| r.days_in_status))
        .map(round_to_tenth)
        .unwrap_or(0.0)
}

// =============================================================================
// Monthly series
// =============================================================================

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Short pt-BR month label, e.g. `Out/26`
pub fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_ABBREVIATIONS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???");
    format!("{}/{:02}", name, year.rem_euclid(100))
}

/// `(year, month)` pairs for `months_back` consecutive months ending at the
/// pivot's month, oldest first
pub fn month_window(months_back: u32, pivot: NaiveDate) -> Vec<(i32, u32)> {
    let pivot_index = pivot.year() * 12 + pivot.month0() as i32;
    (0..months_back as i32)
        .rev()
        .map(|offset| {
            let index = pivot_index - offset;
            (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
        })
        .collect()
}

/// Month-bucketed counts with chronological labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

/// Count records per calendar month over `months_back` months ending at the
/// pivot's month. Every month gets a bucket, empty ones count 0.
pub fn monthly_movement_series<F>(
    records: &[ContainerRecord],
    months_back: u32,
    pivot: NaiveDate,
    date_selector: F,
) -> MonthlySeries
where
    F: Fn(&ContainerRecord) -> Option<NaiveDate>,
{
    let window = month_window(months_back, pivot);
    let counts = window
        .iter()
        .map(|&(year, month)| {
            records
                .iter()
                .filter_map(&date_selector)
                .filter(|date| date.year() == year && date.month() == month)
                .count()
        })
        .collect();

    MonthlySeries {
        labels: window.iter().map(|&(y, m)| month_label(y, m)).collect(),
        counts,
    }
}

/// Distinct bookings per month, keyed by the month of the expected release
pub fn monthly_distinct_bookings(records: &[ContainerRecord], months_back: u32, pivot: NaiveDate) -> MonthlySeries {
    let window = month_window(months_back, pivot);
    let counts = window
        .iter()
        .map(|&(year, month)| {
            records
                .iter()
                .filter(|r| {
                    r.expected_release_at
                        .is_some_and(|date| date.year() == year && date.month() == month)
                })
                .filter_map(|r| r.booking())
                .collect::<BTreeSet<_>>()
                .len()
        })
        .collect();

    MonthlySeries {
        labels: window.iter().map(|&(y, m)| month_label(y, m)).collect(),
        counts,
    }
}

// =============================================================================
// Ratios and KPIs
// =============================================================================

/// Share of records awaiting repair, in percent with one decimal
pub fn repair_ratio(records: &[ContainerRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let in_repair = count_status(records, status::REPAIR);
    round_to_tenth(100.0 * in_repair as f64 / records.len() as f64)
}

/// Records whose expected release falls in the pivot's calendar month
pub fn releases_in_month(records: &[ContainerRecord], pivot: NaiveDate) -> usize {
    records
        .iter()
        .filter(|r| {
            r.expected_release_at
                .is_some_and(|date| date.year() == pivot.year() && date.month() == pivot.month())
        })
        .count()
}

/// Records with at least `threshold` days in status, longest first then by code
pub fn stuck_records(records: &[ContainerRecord], threshold: i64) -> Vec<&ContainerRecord> {
    let mut stuck: Vec<&ContainerRecord> = records
        .iter()
        .filter(|r| r.days_in_status.unwrap_or(0) >= threshold)
        .collect();
    stuck.sort_by(|a, b| {
        b.days_in_status
            .unwrap_or(0)
            .cmp(&a.days_in_status.unwrap_or(0))
            .then_with(|| a.code.cmp(&b.code))
    });
    stuck
}

/// Records released on or before `pivot + window_days`, overdue ones included,
/// earliest first then by code
pub fn due_releases(records: &[ContainerRecord], window_days: i64, pivot: NaiveDate) -> Vec<&ContainerRecord> {
    let limit = offset_date(pivot, window_days);
    let mut due: Vec<&ContainerRecord> = records
        .iter()
        .filter(|r| {
            r.expected_release_at
                .is_some_and(|date| limit.is_none_or(|limit| date <= limit))
        })
        .collect();
    due.sort_by(|a, b| {
        a.expected_release_at
            .cmp(&b.expected_release_at)
            .then_with(|| a.code.cmp(&b.code))
    });
    due
}

/// Codes of stuck records plus codes with due or overdue releases
pub fn critical_set(
    records: &[ContainerRecord],
    stuck_threshold_days: i64,
    upcoming_window_days: i64,
    pivot: NaiveDate,
) -> BTreeSet<String> {
    stuck_records(records, stuck_threshold_days)
        .into_iter()
        .chain(due_releases(records, upcoming_window_days, pivot))
        .map(|r| r.code.clone())
        .collect()
}

// =============================================================================
// Bookings and availability
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUtilization {
    pub active_booking_count: usize,
    pub reserved_record_count: usize,
    pub available_count: usize,
    pub maintenance_count: usize,
}

pub fn booking_utilization(records: &[ContainerRecord]) -> BookingUtilization {
    let bookings: BTreeSet<&str> = records.iter().filter_map(|r| r.booking()).collect();
    let in_maintenance = |r: &&ContainerRecord| status_in(&r.status, &status::BOOKING_MAINTENANCE);

    BookingUtilization {
        active_booking_count: bookings.len(),
        reserved_record_count: records.iter().filter(|r| r.has_booking()).count(),
        available_count: records
            .iter()
            .filter(|r| !r.has_booking())
            .filter(|r| !in_maintenance(r))
            .count(),
        maintenance_count: records.iter().filter(in_maintenance).count(),
    }
}

/// Dashboard stock split by booking and status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAvailability {
    pub reserved: usize,
    pub maintenance: usize,
    pub available: usize,
}

pub fn stock_availability(records: &[ContainerRecord]) -> StockAvailability {
    StockAvailability {
        reserved: records.iter().filter(|r| r.has_booking()).count(),
        maintenance: records
            .iter()
            .filter(|r| status_in(&r.status, &status::DASHBOARD_MAINTENANCE))
            .count(),
        available: records
            .iter()
            .filter(|r| status_in(&r.status, &status::DASHBOARD_AVAILABLE))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rec(code: &str, client: &str, status: &str, days: Option<i64>) -> ContainerRecord {
        ContainerRecord {
            code: code.to_string(),
            client: client.to_string(),
            status: status.to_string(),
            days_in_status: days,
            ..Default::default()
        }
    }

    #[test]
    fn test_status_histogram_buckets_blank_status() {
        let records = vec![
            rec("A", "X", " Ag. Reparo", None),
            rec("B", "X", "Ag. Reparo", None),
            rec("C", "X", "  ", None),
        ];
        let histogram = status_histogram(&records);
        assert_eq!(histogram.get("Ag. Reparo"), Some(&2));
        assert_eq!(histogram.get(BLANK_STATUS_LABEL), Some(&1));
    }

    #[test]
    fn test_ranked_counts_orders_by_count_then_label() {
        let mut counts = BTreeMap::new();
        counts.insert("Tolueno".to_string(), 2);
        counts.insert("Etanol".to_string(), 2);
        counts.insert("Hexano".to_string(), 5);
        let labels: Vec<String> = ranked_counts(counts).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Hexano", "Etanol", "Tolueno"]);
    }

    #[test]
    fn test_average_days_by_status_omits_statuses_without_days() {
        let records = vec![
            rec("A", "X", status::REPAIR, Some(4)),
            rec("B", "X", status::REPAIR, Some(7)),
            rec("C", "X", status::CLEANING, None),
        ];
        let averages = average_days_by_status(&records);
        assert_eq!(averages.get(status::REPAIR), Some(&5.5));
        assert!(!averages.contains_key(status::CLEANING));
    }

    #[test]
    fn test_matrix_defaults_missing_cells_to_zero() {
        let records = vec![
            rec("A", "Alpha", status::REPAIR, Some(4)),
            rec("B", "Alpha", status::REPAIR, Some(5)),
            rec("C", "Alpha", status::REPAIR, Some(5)),
            rec("D", "Beta", status::CLEANING, Some(2)),
        ];
        let clients = vec!["Alpha".to_string(), "Beta".to_string()];
        let matrix = average_days_matrix(&records, &clients, &status::REPORT_ORDER);
        assert_eq!(matrix.statuses.len(), 5);
        assert_eq!(matrix.cell("Alpha", status::REPAIR), Some(4.7));
        assert_eq!(matrix.cell("Alpha", status::CLEANING), Some(0.0));
        assert_eq!(matrix.cell("Beta", status::CLEANING), Some(2.0));
        assert_eq!(matrix.rows[1].averages, vec![2.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_extremes_keeps_first_of_ties() {
        let records = vec![
            rec("A", "X", "", Some(3)),
            rec("B", "X", "", Some(9)),
            rec("C", "X", "", None),
            rec("D", "X", "", Some(9)),
        ];
        assert_eq!(extremes(&records).map(|r| r.code.as_str()), Some("B"));
        assert!(extremes(&[rec("E", "X", "", None)]).is_none());
    }

    #[test]
    fn test_overall_average_rounds_and_handles_empty() {
        let records = vec![rec("A", "X", "", Some(1)), rec("B", "X", "", Some(2)), rec("C", "X", "", Some(2))];
        assert_eq!(overall_average_days(&records), 1.7);
        assert_eq!(overall_average_days(&[]), 0.0);
    }

    #[test]
    fn test_round_to_tenth_is_half_even() {
        assert_eq!(round_to_tenth(2.25), 2.2);
        assert_eq!(round_to_tenth(2.75), 2.8);
        assert_eq!(round_to_tenth(33.333), 33.3);
    }

    #[test]
    fn test_month_window_crosses_year_boundary() {
        let window = month_window(6, date(2026, 2, 14));
        assert_eq!(
            window,
            vec![(2025, 9), (2025, 10), (2025, 11), (2025, 12), (2026, 1), (2026, 2)]
        );
        assert_eq!(month_label(2025, 9), "Set/25");
        assert_eq!(month_label(2026, 2), "Fev/26");
    }

    #[test]
    fn test_monthly_series_keeps_empty_months() {
        let pivot = date(2026, 10, 19);
        let mut a = rec("A", "X", "", None);
        a.unloaded_at_yard_at = date(2026, 10, 1).and_hms_opt(8, 0, 0);
        let mut b = rec("B", "X", "", None);
        b.unloaded_at_yard_at = date(2026, 6, 30).and_hms_opt(23, 0, 0);
        let mut old = rec("C", "X", "", None);
        old.unloaded_at_yard_at = date(2026, 4, 30).and_hms_opt(9, 0, 0);

        let series = monthly_movement_series(&[a, b, old], 6, pivot, |r| r.unloaded_at_yard_at.map(|t| t.date()));
        assert_eq!(series.labels, vec!["Mai/26", "Jun/26", "Jul/26", "Ago/26", "Set/26", "Out/26"]);
        assert_eq!(series.counts, vec![0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_monthly_distinct_bookings() {
        let pivot = date(2026, 10, 19);
        let mk = |code: &str, booking: &str, release: NaiveDate| ContainerRecord {
            code: code.to_string(),
            booking_number: Some(booking.to_string()),
            expected_release_at: Some(release),
            ..Default::default()
        };
        let records = vec![
            mk("A", "BK1", date(2026, 10, 2)),
            mk("B", "BK1", date(2026, 10, 9)),
            mk("C", "BK2", date(2026, 10, 9)),
            mk("D", "BK3", date(2026, 9, 9)),
        ];
        let series = monthly_distinct_bookings(&records, 6, pivot);
        assert_eq!(series.counts, vec![0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_repair_ratio() {
        assert_eq!(repair_ratio(&[]), 0.0);
        let records = vec![
            rec("A", "X", status::REPAIR, None),
            rec("B", "X", status::CLEANING, None),
            rec("C", "X", status::OFF_HIRE, None),
            rec("D", "X", status::INSPECTION, None),
        ];
        assert_eq!(repair_ratio(&records), 25.0);
    }

    #[test]
    fn test_critical_set_has_no_lower_bound_on_releases() {
        let pivot = date(2026, 10, 19);
        let stuck = rec("STUCK", "X", "", Some(12));
        let mut overdue = rec("OVERDUE", "X", "", Some(1));
        overdue.expected_release_at = Some(date(2026, 10, 14));
        let mut later = rec("LATER", "X", "", None);
        later.expected_release_at = Some(date(2026, 10, 23));
        let mut edge = rec("EDGE", "X", "", None);
        edge.expected_release_at = Some(date(2026, 10, 22));
        let fresh = rec("FRESH", "X", "", None);

        let critical = critical_set(&[stuck, overdue, later, edge, fresh], 10, 3, pivot);
        let codes: Vec<&str> = critical.iter().map(String::as_str).collect();
        assert_eq!(codes, vec!["EDGE", "OVERDUE", "STUCK"]);
    }

    #[test]
    fn test_critical_set_counts_a_code_once() {
        let pivot = date(2026, 10, 19);
        let mut both = rec("BOTH", "X", "", Some(30));
        both.expected_release_at = Some(pivot);
        assert_eq!(critical_set(&[both], 10, 3, pivot).len(), 1);
    }

    #[test]
    fn test_stuck_records_order() {
        let records = vec![
            rec("B", "X", "", Some(10)),
            rec("A", "X", "", Some(10)),
            rec("C", "X", "", Some(20)),
            rec("D", "X", "", Some(9)),
        ];
        let codes: Vec<&str> = stuck_records(&records, 10).iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_booking_utilization() {
        let mut a = rec("A", "X", status::OFF_HIRE, None);
        a.booking_number = Some("BK1".into());
        let mut b = rec("B", "X", status::REPAIR, None);
        b.booking_number = Some("BK1".into());
        let mut c = rec("C", "X", status::CLEANING, None);
        c.booking_number = Some("".into());
        let d = rec("D", "X", status::INSPECTION, None);

        let utilization = booking_utilization(&[a, b, c, d]);
        assert_eq!(
            utilization,
            BookingUtilization {
                active_booking_count: 1,
                reserved_record_count: 2,
                available_count: 1,
                maintenance_count: 2,
            }
        );
        assert_eq!(booking_utilization(&[]), BookingUtilization::default());
    }

    #[test]
    fn test_stock_availability() {
        let mut reserved = rec("A", "X", status::CLEANING, None);
        reserved.booking_number = Some("BK9".into());
        let records = vec![
            reserved,
            rec("B", "X", status::REPAIR, None),
            rec("C", "X", status::OFF_HIRE, None),
            rec("D", "X", status::AWAITING_ESTIMATE, None),
        ];
        assert_eq!(
            stock_availability(&records),
            StockAvailability {
                reserved: 1,
                maintenance: 2,
                available: 2,
            }
        );
    }

    #[test]
    fn test_releases_in_month() {
        let pivot = date(2026, 10, 19);
        let mk = |release: NaiveDate| ContainerRecord {
            expected_release_at: Some(release),
            ..Default::default()
        };
        let records = vec![mk(date(2026, 10, 1)), mk(date(2026, 10, 31)), mk(date(2026, 11, 1)), mk(date(2025, 10, 5))];
        assert_eq!(releases_in_month(&records, pivot), 2);
    }

    #[test]
    fn test_due_releases_with_huge_window_keeps_every_dated_release() {
        let pivot = date(2026, 10, 19);
        let records = vec![
            ContainerRecord {
                code: "A".into(),
                expected_release_at: Some(date(2030, 1, 1)),
                ..Default::default()
            },
            ContainerRecord {
                code: "B".into(),
                ..Default::default()
            },
        ];
        let due = due_releases(&records, i64::MAX, pivot);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].code, "A");
    }
}
