//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

/// Dashboard counters
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_books: i64,
    pub total_members: i64,
    pub open_loans: i64,
}

/// Library-wide totals for the dashboard
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Library statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let total_books = state.services.catalog.count().await?;
    let total_members = state.services.members.count().await?;
    let open_loans = state.services.loans.open_loan_count().await?;

    Ok(Json(StatsResponse {
        total_books,
        total_members,
        open_loans,
    }))
}
