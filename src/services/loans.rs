//! Loan workflow service
//!
//! The only component enforcing cross-entity rules: availability checks on
//! borrow, single-close on return. All state transitions go through the
//! transactional store operations.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    audit::AuditLog,
    error::{AppError, AppResult},
    models::BorrowingRecord,
    repository::{BookStore, BorrowStore},
};

#[derive(Clone)]
pub struct LoansService {
    books: Arc<dyn BookStore>,
    borrows: Arc<dyn BorrowStore>,
    audit: Arc<AuditLog>,
}

impl LoansService {
    pub fn new(books: Arc<dyn BookStore>, borrows: Arc<dyn BorrowStore>, audit: Arc<AuditLog>) -> Self {
        Self {
            books,
            borrows,
            audit,
        }
    }

    /// Borrow a book for a member.
    ///
    /// Fails with `NotFound` when the book is absent and `NoCopiesAvailable`
    /// when no copies are left; neither failure changes any state. On
    /// success the copy count drops by one and exactly one open record is
    /// created.
    pub async fn borrow_book(&self, book_id: Uuid, member_id: i32) -> AppResult<BorrowingRecord> {
        self.audit.record(format!(
            "Attempting to borrow book with ID: {} for member with ID: {}",
            book_id, member_id
        ));

        let book = match self.books.get(book_id).await? {
            Some(book) => book,
            None => {
                self.audit.record(format!(
                    "Borrowing failed: Book with ID {} not found.",
                    book_id
                ));
                return Err(AppError::NotFound(format!(
                    "Book with id {} not found",
                    book_id
                )));
            }
        };

        if book.available_copies <= 0 {
            self.audit.record(format!(
                "Borrowing failed: No available copies for book with ID {}",
                book_id
            ));
            return Err(AppError::NoCopiesAvailable);
        }

        // The store decrements conditionally, so a borrow that races this
        // availability check still fails cleanly instead of going negative.
        let record = match self.borrows.borrow(book_id, member_id).await {
            Ok(record) => record,
            Err(AppError::NoCopiesAvailable) => {
                self.audit.record(format!(
                    "Borrowing failed: No available copies for book with ID {}",
                    book_id
                ));
                return Err(AppError::NoCopiesAvailable);
            }
            Err(err) => return Err(err),
        };

        self.audit.record(format!(
            "Book with ID {} successfully borrowed by member with ID {}",
            book_id, member_id
        ));

        Ok(record)
    }

    /// Return a borrowed book by its record id.
    ///
    /// Fails with `NotFound` for an unknown record and `AlreadyReturned`
    /// for a closed one; the first return timestamp is never overwritten.
    pub async fn return_book(&self, record_id: i32) -> AppResult<BorrowingRecord> {
        self.audit.record(format!(
            "Attempting to return book for borrowing record ID: {}",
            record_id
        ));

        let record = match self.borrows.get(record_id).await? {
            Some(record) => record,
            None => {
                self.audit.record(format!(
                    "Return failed: Borrowing record with ID {} not found.",
                    record_id
                ));
                return Err(AppError::NotFound(format!(
                    "Borrowing record with id {} not found",
                    record_id
                )));
            }
        };

        if !record.is_open() {
            self.audit.record(format!(
                "Return failed: Book for record ID {} has already been returned.",
                record_id
            ));
            return Err(AppError::AlreadyReturned);
        }

        let closed = self.borrows.return_record(record_id).await?;

        self.audit.record(format!(
            "Book with ID {} successfully returned for record ID {}",
            closed.book_id, record_id
        ));

        Ok(closed)
    }

    pub async fn all_records(&self) -> AppResult<Vec<BorrowingRecord>> {
        self.borrows.get_all().await
    }

    pub async fn open_loan_count(&self) -> AppResult<i64> {
        self.borrows.open_count().await
    }
}
