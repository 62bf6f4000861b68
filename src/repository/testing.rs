//! In-memory store used by service unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowingRecord, CreateBook, UpdateBook},
    repository::{BookStore, BorrowStore},
};

/// HashMap-backed stand-in for the Postgres repositories. Borrow and return
/// mirror the transactional semantics of `BorrowsRepository`: conditional
/// decrement, single close, increment skipped for a deleted book.
#[derive(Default)]
pub struct InMemoryLibrary {
    books: Mutex<HashMap<Uuid, Book>>,
    records: Mutex<Vec<BorrowingRecord>>,
    next_record_id: AtomicI32,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_book(&self, title: &str, copies: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.books.lock().unwrap().insert(
            id,
            Book {
                id,
                title: title.to_string(),
                author: "Test Author".to_string(),
                genre: "Test Genre".to_string(),
                available_copies: copies,
            },
        );
        id
    }

    pub fn remove_book(&self, id: Uuid) {
        self.books.lock().unwrap().remove(&id);
    }

    pub fn copies(&self, id: Uuid) -> i32 {
        self.books.lock().unwrap()[&id].available_copies
    }

    pub fn record(&self, id: i32) -> BorrowingRecord {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .unwrap()
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl BookStore for InMemoryLibrary {
    async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let id = Uuid::new_v4();
        let created = Book {
            id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            available_copies: book.initial_copies(),
        };
        self.books.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, book: &UpdateBook) -> AppResult<()> {
        if let Some(existing) = self.books.lock().unwrap().get_mut(&id) {
            existing.title = book.title.clone();
            existing.author = book.author.clone();
            existing.genre = book.genre.clone();
            existing.available_copies = book.available_copies;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.books.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Book>> {
        Ok(self.books.lock().unwrap().get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.lock().unwrap().values().cloned().collect())
    }

    async fn list(&self, page: u32, page_size: u32) -> AppResult<Vec<Book>> {
        let mut books: Vec<Book> = self.books.lock().unwrap().values().cloned().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));

        let offset = (page.saturating_sub(1) * page_size) as usize;
        Ok(books
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.books.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl BorrowStore for InMemoryLibrary {
    async fn borrow(&self, book_id: Uuid, member_id: i32) -> AppResult<BorrowingRecord> {
        let mut books = self.books.lock().unwrap();
        let book = books
            .get_mut(&book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", book_id)))?;

        if book.available_copies <= 0 {
            return Err(AppError::NoCopiesAvailable);
        }
        book.available_copies -= 1;

        let record = BorrowingRecord {
            id: self.next_record_id.fetch_add(1, Ordering::SeqCst) + 1,
            book_id,
            member_id,
            borrow_date: Utc::now(),
            return_date: None,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn return_record(&self, record_id: i32) -> AppResult<BorrowingRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Borrowing record with id {} not found", record_id))
            })?;

        if record.return_date.is_some() {
            return Err(AppError::AlreadyReturned);
        }
        record.return_date = Some(Utc::now());
        let closed = record.clone();
        drop(records);

        if let Some(book) = self.books.lock().unwrap().get_mut(&closed.book_id) {
            book.available_copies += 1;
        }

        Ok(closed)
    }

    async fn get(&self, record_id: i32) -> AppResult<Option<BorrowingRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == record_id)
            .cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<BorrowingRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn open_count(&self) -> AppResult<i64> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.return_date.is_none())
            .count() as i64)
    }
}
