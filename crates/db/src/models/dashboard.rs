//! Dashboard summary payload.

use serde::Serialize;

/// Response body for `GET /api/dashboard`.
///
/// Field names are camelCase on the wire, matching what the dashboard UI
/// reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: i64,
    pub total_invoices: i64,
    pub monthly_revenue: f64,
    /// Month-over-month revenue change, formatted like `"23.5%"`.
    pub growth_rate: String,
}
