//! Report row model shared by the reporting queries.

use serde::Serialize;
use sqlx::FromRow;

/// One aggregated row: a label (month or customer name) and a summed value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: f64,
}
