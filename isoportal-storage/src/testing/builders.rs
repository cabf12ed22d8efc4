//! Builder pattern utilities for creating test records

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use isoportal_api_types::ContainerRecord;
use rust_decimal::Decimal;

/// Builder pattern for creating test container records
pub struct ContainerRecordBuilder {
    record: ContainerRecord,
}

impl Default for ContainerRecordBuilder {
    fn default() -> Self {
        Self::new("TEST0000001")
    }
}

impl ContainerRecordBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            record: ContainerRecord {
                code: code.into(),
                client: "Empresa Alpha".to_string(),
                status: "Ag. Limpeza".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.record.client = client.into();
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.record.product = Some(product.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    /// Status start at midnight of `date`
    pub fn with_status_since(mut self, date: NaiveDate) -> Self {
        self.record.status_started_at = Some(date.and_time(NaiveTime::MIN));
        self
    }

    pub fn with_days_in_status(mut self, days: i64) -> Self {
        self.record.days_in_status = Some(days);
        self
    }

    pub fn with_release(mut self, date: NaiveDate) -> Self {
        self.record.expected_release_at = Some(date);
        self
    }

    pub fn with_exit(mut self, at: NaiveDateTime) -> Self {
        self.record.exited_at = Some(at);
        self
    }

    pub fn with_unloaded_at_yard(mut self, at: NaiveDateTime) -> Self {
        self.record.unloaded_at_yard_at = Some(at);
        self
    }

    pub fn with_booking(mut self, booking: impl Into<String>) -> Self {
        self.record.booking_number = Some(booking.into());
        self
    }

    pub fn with_repair_value(mut self, value: Decimal) -> Self {
        self.record.accumulated_repair_value = Some(value);
        self
    }

    pub fn with_documents(mut self) -> Self {
        let code = self.record.code.clone();
        self.record.inspection_report_url = Some(format!("/docs/laudos/{code}_EIR.pdf"));
        self.record.cleaning_certificate_url = Some(format!("/docs/certificados/{code}_CleaningCertificate.pdf"));
        self
    }

    pub fn build(self) -> ContainerRecord {
        self.record
    }
}
