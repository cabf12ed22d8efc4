//! Report thresholds and windows

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportingConfig {
    pub stuck_threshold_days: i64,
    pub critical_window_days: i64,
    pub upcoming_window_days: i64,
    pub inventory_alert_days: i64,
    pub months_back: u32,
    pub top_upcoming: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            stuck_threshold_days: 10,
            critical_window_days: 3,
            upcoming_window_days: 7,
            inventory_alert_days: 15,
            months_back: 6,
            top_upcoming: 5,
        }
    }
}

impl Validatable for ReportingConfig {
    fn validate(&self) -> ConfigResult<()> {
        let domain = self.domain_name();
        validate_positive(self.stuck_threshold_days, "stuck_threshold_days", domain)?;
        validate_positive(self.critical_window_days, "critical_window_days", domain)?;
        validate_positive(self.upcoming_window_days, "upcoming_window_days", domain)?;
        validate_positive(self.inventory_alert_days, "inventory_alert_days", domain)?;
        validate_positive(self.months_back, "months_back", domain)?;
        validate_positive(self.top_upcoming, "top_upcoming", domain)?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "reporting"
    }
}
