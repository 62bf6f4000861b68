//! Borrowing records repository for database operations
//!
//! The borrow and return workflows each touch two tables (the book's copy
//! count and the record itself), so both run as a single transaction with
//! rollback on any failure.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::BorrowingRecord,
    repository::BorrowStore,
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowStore for BorrowsRepository {
    async fn borrow(&self, book_id: Uuid, member_id: i32) -> AppResult<BorrowingRecord> {
        let mut tx = self.pool.begin().await?;

        // Conditional decrement: a concurrent borrow of the last copy loses
        // here instead of driving the count negative.
        let decremented = sqlx::query(
            r#"
            UPDATE books
            SET available_copies = available_copies - 1
            WHERE id = $1 AND available_copies > 0
            "#,
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

            tx.rollback().await?;

            return Err(if exists {
                AppError::NoCopiesAvailable
            } else {
                AppError::NotFound(format!("Book with id {} not found", book_id))
            });
        }

        let record = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            INSERT INTO borrowing_records (book_id, member_id, borrow_date, return_date)
            VALUES ($1, $2, $3, NULL)
            RETURNING id, book_id, member_id, borrow_date, return_date
            "#,
        )
        .bind(book_id)
        .bind(member_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn return_record(&self, record_id: i32) -> AppResult<BorrowingRecord> {
        let mut tx = self.pool.begin().await?;

        // Close only while still open; return_date is set exactly once.
        let closed = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            UPDATE borrowing_records
            SET return_date = $1
            WHERE id = $2 AND return_date IS NULL
            RETURNING id, book_id, member_id, borrow_date, return_date
            "#,
        )
        .bind(Utc::now())
        .bind(record_id)
        .fetch_optional(&mut *tx)
        .await?;

        let closed = match closed {
            Some(record) => record,
            None => {
                let already_returned: bool = sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM borrowing_records WHERE id = $1)",
                )
                .bind(record_id)
                .fetch_one(&mut *tx)
                .await?;

                tx.rollback().await?;

                return Err(if already_returned {
                    AppError::AlreadyReturned
                } else {
                    AppError::NotFound(format!(
                        "Borrowing record with id {} not found",
                        record_id
                    ))
                });
            }
        };

        // Zero rows here means the book was deleted while on loan; the
        // record still closes and the increment is skipped.
        let incremented = sqlx::query(
            "UPDATE books SET available_copies = available_copies + 1 WHERE id = $1",
        )
        .bind(closed.book_id)
        .execute(&mut *tx)
        .await?;

        if incremented.rows_affected() == 0 {
            tracing::debug!(
                "book {} missing on return of record {}, copy count not restored",
                closed.book_id,
                record_id
            );
        }

        tx.commit().await?;

        Ok(closed)
    }

    async fn get(&self, record_id: i32) -> AppResult<Option<BorrowingRecord>> {
        let record = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            SELECT id, book_id, member_id, borrow_date, return_date
            FROM borrowing_records
            WHERE id = $1
            "#,
        )
        .bind(record_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn get_all(&self) -> AppResult<Vec<BorrowingRecord>> {
        let records = sqlx::query_as::<_, BorrowingRecord>(
            r#"
            SELECT id, book_id, member_id, borrow_date, return_date
            FROM borrowing_records
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn open_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM borrowing_records WHERE return_date IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
