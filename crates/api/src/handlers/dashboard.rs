//! Handler for the `/dashboard` summary endpoint.

use axum::extract::State;
use axum::Json;

use salon_core::stats;
use salon_db::models::dashboard::DashboardStats;
use salon_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard
///
/// Three independent read queries combined into one payload. Growth is the
/// current calendar month's revenue against the previous month's.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let total_customers = DashboardRepo::total_customers(&state.pool).await?;
    let total_invoices = DashboardRepo::total_invoices(&state.pool).await?;
    let monthly_revenue = DashboardRepo::current_month_revenue(&state.pool).await?;
    let previous_revenue = DashboardRepo::previous_month_revenue(&state.pool).await?;

    Ok(Json(DashboardStats {
        total_customers,
        total_invoices,
        monthly_revenue,
        growth_rate: stats::growth_rate(monthly_revenue, previous_revenue),
    }))
}
