//! Borrowing record (loan ledger) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Borrowing record from database.
///
/// A record is created by a successful borrow and closed by a successful
/// return; rows are never deleted. `return_date` is set exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowingRecord {
    pub id: i32,
    pub book_id: Uuid,
    pub member_id: i32,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

impl BorrowingRecord {
    /// True while the loan is outstanding
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}
