//! Dashboard statistics helpers.

/// Month-over-month revenue growth, formatted as the dashboard displays it
/// (`"12.3%"`, one decimal place, sign included for decline).
///
/// When the previous month had no revenue there is no meaningful baseline,
/// so the figure is reported as flat rather than infinite.
pub fn growth_rate(current_month: f64, previous_month: f64) -> String {
    if previous_month <= 0.0 {
        return "0.0%".to_string();
    }
    let rate = (current_month - previous_month) / previous_month * 100.0;
    format!("{rate:.1}%")
}
