use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An isotank tracked by the portal
///
/// Records are read-only inside the portal; creation and persistence belong
/// to the upstream inventory system. `days_in_status` is derived and is
/// always recomputed from `status_started_at` before a record is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerRecord {
    pub code: String,
    pub product: Option<String>,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub owner_operator: Option<String>,

    pub status: String,
    pub status_started_at: Option<NaiveDateTime>,
    pub days_in_status: Option<i64>,

    pub expected_release_at: Option<NaiveDate>,
    pub entered_yard_at: Option<NaiveDateTime>,
    pub unloaded_at_yard_at: Option<NaiveDateTime>,
    pub loaded_on_vehicle_at: Option<NaiveDateTime>,
    pub expected_terminal_arrival_at: Option<NaiveDateTime>,
    pub unloaded_at_terminal_at: Option<NaiveDateTime>,
    pub exited_at: Option<NaiveDateTime>,
    pub sla_deadline: Option<NaiveDateTime>,
    pub periodic_test_due_at: Option<NaiveDate>,

    pub accumulated_repair_value: Option<Decimal>,
    pub booking_number: Option<String>,

    pub yard: Option<String>,
    pub block: Option<String>,
    pub row: Option<String>,
    pub stack: Option<String>,
    pub vehicle_plate: Option<String>,

    // Media and document references, passed through untouched
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo_urls: Vec<String>,
    pub inspection_report_url: Option<String>,
    pub cleaning_certificate_url: Option<String>,
}

impl ContainerRecord {
    /// Recompute `days_in_status` as whole days between the status start date
    /// and `today`. Time of day is ignored.
    pub fn refresh_days_in_status(&mut self, today: NaiveDate) {
        self.days_in_status = self
            .status_started_at
            .map(|started| (today - started.date()).num_days());
    }

    /// Case-insensitive substring match on code or product.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.code.to_lowercase().contains(&needle)
            || self
                .product
                .as_deref()
                .is_some_and(|product| product.to_lowercase().contains(&needle))
    }

    /// Non-empty booking number, if any.
    pub fn booking(&self) -> Option<&str> {
        self.booking_number
            .as_deref()
            .map(str::trim)
            .filter(|booking| !booking.is_empty())
    }

    pub fn has_booking(&self) -> bool {
        self.booking().is_some()
    }

    pub fn status_trimmed(&self) -> &str {
        self.status.trim()
    }
}

/// Internal note attached to a container by portal staff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: Uuid,
    pub container_code: String,
    pub text: String,
    pub author: String,
    pub recorded_at: NaiveDateTime,
}

impl Observation {
    pub fn new(
        container_code: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
        recorded_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            container_code: container_code.into(),
            text: text.into(),
            author: author.into(),
            recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_status_ignores_time_of_day() {
        let mut record = ContainerRecord {
            code: "DHDU1274480".to_string(),
            status_started_at: date(2026, 10, 1).and_hms_opt(23, 59, 0),
            days_in_status: Some(999),
            ..Default::default()
        };
        record.refresh_days_in_status(date(2026, 10, 11));
        assert_eq!(record.days_in_status, Some(10));

        record.status_started_at = None;
        record.refresh_days_in_status(date(2026, 10, 11));
        assert_eq!(record.days_in_status, None);
    }

    #[test]
    fn test_search_matches_code_or_product_case_insensitively() {
        let record = ContainerRecord {
            code: "EXFU3002145".to_string(),
            product: Some("Ácido acético".to_string()),
            ..Default::default()
        };
        assert!(record.matches_search("exfu"));
        assert!(record.matches_search("ACÉTICO"));
        assert!(!record.matches_search("tolueno"));
    }

    #[test]
    fn test_blank_booking_is_not_a_booking() {
        let mut record = ContainerRecord {
            booking_number: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!record.has_booking());
        record.booking_number = Some(" BK-100 ".to_string());
        assert_eq!(record.booking(), Some("BK-100"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ContainerRecord {
            code: "A".to_string(),
            kind: Some("T11".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "T11");
        assert!(value.get("daysInStatus").is_some());
        assert!(value.get("photoUrls").is_none());
    }
}
