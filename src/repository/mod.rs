//! Repository layer for database operations

pub mod books;
pub mod borrows;
pub mod members;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Book, BorrowingRecord, CreateBook, CreateMember, Member, UpdateBook, UpdateMember},
};

/// Storage port for books.
///
/// `get` returns `None` for a missing row so callers can tell absence apart
/// from a storage failure, which always surfaces as `AppError::Database`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a book and return it with its server-assigned id.
    async fn create(&self, book: &CreateBook) -> AppResult<Book>;

    /// Overwrite all mutable fields by id; no-op when the id is absent.
    async fn update(&self, id: Uuid, book: &UpdateBook) -> AppResult<()>;

    /// Remove the row; no-op when absent.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn get(&self, id: Uuid) -> AppResult<Option<Book>>;

    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// Page of books ordered by title; `page` is 1-based.
    async fn list(&self, page: u32, page_size: u32) -> AppResult<Vec<Book>>;

    async fn count(&self) -> AppResult<i64>;
}

/// Storage port for members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn create(&self, member: &CreateMember) -> AppResult<Member>;

    async fn update(&self, id: i32, member: &UpdateMember) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn get(&self, id: i32) -> AppResult<Option<Member>>;

    async fn get_all(&self) -> AppResult<Vec<Member>>;

    /// Page of members ordered by name; `page` is 1-based.
    async fn list(&self, page: u32, page_size: u32) -> AppResult<Vec<Member>>;

    async fn count(&self) -> AppResult<i64>;
}

/// Storage port for borrowing records.
///
/// The borrow and return operations each pair two writes (copy count and
/// record) inside a single transaction; see `BorrowsRepository`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowStore: Send + Sync {
    /// Atomically decrement the book's copy count (only while positive) and
    /// insert an open record. Fails with `NotFound` when the book is absent
    /// and `NoCopiesAvailable` when the count is already zero.
    async fn borrow(&self, book_id: Uuid, member_id: i32) -> AppResult<BorrowingRecord>;

    /// Atomically close the record and increment the book's copy count.
    /// The increment is skipped when the book row no longer exists.
    async fn return_record(&self, record_id: i32) -> AppResult<BorrowingRecord>;

    async fn get(&self, record_id: i32) -> AppResult<Option<BorrowingRecord>>;

    async fn get_all(&self) -> AppResult<Vec<BorrowingRecord>>;

    /// Number of records whose loan is still outstanding.
    async fn open_count(&self) -> AppResult<i64>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub members: members::MembersRepository,
    pub borrows: borrows::BorrowsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            borrows: borrows::BorrowsRepository::new(pool.clone()),
            pool,
        }
    }
}
