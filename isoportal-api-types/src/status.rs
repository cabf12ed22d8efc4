//! Canonical workflow statuses
//!
//! Status is a free-form label in the upstream system, but the portal works
//! against a fixed set of five values. Comparisons are exact after trimming.

pub const OFF_HIRE: &str = "Ag. Off Hire";
pub const AWAITING_ESTIMATE: &str = "Ag. Envio Estimativa";
pub const CLEANING: &str = "Ag. Limpeza";
pub const REPAIR: &str = "Ag. Reparo";
pub const INSPECTION: &str = "Ag. Inspeção";

/// Catalog order, as served to status dropdowns.
pub const CATALOG: [&str; 5] = [OFF_HIRE, AWAITING_ESTIMATE, CLEANING, REPAIR, INSPECTION];

/// Column order of the client x status report matrix.
pub const REPORT_ORDER: [&str; 5] = [CLEANING, REPAIR, INSPECTION, AWAITING_ESTIMATE, OFF_HIRE];

/// Statuses that take a tank out of service in booking reports.
pub const BOOKING_MAINTENANCE: [&str; 2] = [REPAIR, INSPECTION];

/// Statuses counted as maintenance on the dashboard.
pub const DASHBOARD_MAINTENANCE: [&str; 3] = [CLEANING, REPAIR, INSPECTION];

/// Statuses counted as available on the dashboard.
pub const DASHBOARD_AVAILABLE: [&str; 2] = [AWAITING_ESTIMATE, OFF_HIRE];

/// Bucket label for records whose status is blank.
pub const BLANK_STATUS_LABEL: &str = "(sem etapa)";

/// Bucket label for records without a product.
pub const BLANK_PRODUCT_LABEL: &str = "(sem produto)";

/// Exact, trimmed status comparison.
pub fn status_eq(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

/// Whether `status` is one of `set` under trimmed comparison.
pub fn status_in(status: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| status_eq(status, candidate))
}
