//! Borrow and return endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::BorrowingRecord, AppState};

/// Borrow request
#[derive(Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Book ID
    pub book_id: Uuid,
    /// Member ID
    pub member_id: i32,
}

/// List every borrowing record, open and closed
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All borrowing records", body = Vec<BorrowingRecord>)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> AppResult<Json<Vec<BorrowingRecord>>> {
    let records = state.services.loans.all_records().await?;
    Ok(Json(records))
}

/// Borrow a book for a member
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Borrowing record created", body = BorrowingRecord),
        (status = 404, description = "Book not found"),
        (status = 409, description = "No copies available")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<(StatusCode, Json<BorrowingRecord>)> {
    let record = state
        .services
        .loans
        .borrow_book(request.book_id, request.member_id)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(("id" = i32, Path, description = "Borrowing record ID")),
    responses(
        (status = 200, description = "Record closed", body = BorrowingRecord),
        (status = 404, description = "Record not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<BorrowingRecord>> {
    let record = state.services.loans.return_book(record_id).await?;
    Ok(Json(record))
}
