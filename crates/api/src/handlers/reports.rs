//! Handlers for the `/reports` resource (canned analytics queries).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use salon_core::error::CoreError;
use salon_core::types::Date;
use salon_core::validation;
use salon_db::models::report::ReportRow;
use salon_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthOwner;
use crate::state::AppState;

/// Query parameters shared by both report endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// GET /api/reports/revenue?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// Revenue summed per calendar month over the range.
pub async fn revenue(
    State(state): State<AppState>,
    _auth: AuthOwner,
    Query(params): Query<ReportParams>,
) -> AppResult<Json<Vec<ReportRow>>> {
    let (start, end) = parse_range(&params)?;
    let rows = ReportRepo::monthly_revenue(&state.pool, start, end).await?;
    Ok(Json(rows))
}

/// GET /api/reports/top-customers?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// Top 10 customers by invoiced total over the range.
pub async fn top_customers(
    State(state): State<AppState>,
    _auth: AuthOwner,
    Query(params): Query<ReportParams>,
) -> AppResult<Json<Vec<ReportRow>>> {
    let (start, end) = parse_range(&params)?;
    let rows = ReportRepo::top_customers(&state.pool, start, end).await?;
    Ok(Json(rows))
}

/// Both bounds are required and must form a non-empty range.
fn parse_range(params: &ReportParams) -> Result<(Date, Date), AppError> {
    let start = params
        .start
        .as_deref()
        .ok_or_else(|| AppError::Core(CoreError::Validation("start is required".into())))?;
    let end = params
        .end
        .as_deref()
        .ok_or_else(|| AppError::Core(CoreError::Validation("end is required".into())))?;

    let start = validation::parse_date("start", start).map_err(CoreError::Validation)?;
    let end = validation::parse_date("end", end).map_err(CoreError::Validation)?;
    if end < start {
        return Err(AppError::Core(CoreError::Validation(
            "end must not be before start".into(),
        )));
    }
    Ok((start, end))
}
