use serde::{Deserialize, Serialize};

/// Thresholds and windows used by dashboards, alerts and reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSettings {
    /// Days in status from which a tank counts as stuck
    pub stuck_threshold_days: i64,
    /// Alert window for due or overdue releases
    pub critical_window_days: i64,
    /// Forward window for "upcoming releases" cards
    pub upcoming_window_days: i64,
    /// Days in status flagged on the inventory page
    pub inventory_alert_days: i64,
    /// Length of monthly series
    pub months_back: u32,
    /// Upcoming releases listed on the dashboard
    pub top_upcoming: usize,
}

impl Default for ReportSettings {
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
