//! Catalog (books) service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    audit::AuditLog,
    error::{AppError, AppResult},
    export,
    models::{Book, CreateBook, UpdateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookStore>,
    audit: Arc<AuditLog>,
}

impl CatalogService {
    pub fn new(books: Arc<dyn BookStore>, audit: Arc<AuditLog>) -> Self {
        Self { books, audit }
    }

    /// Add a book to the catalog
    pub async fn add_book(&self, book: CreateBook) -> AppResult<Book> {
        if book.initial_copies() < 0 {
            return Err(AppError::BadRequest(
                "available_copies must not be negative".to_string(),
            ));
        }

        let created = self.books.create(&book).await?;
        self.audit.record(format!(
            "{} Copies of {} Added",
            created.available_copies, created.title
        ));

        Ok(created)
    }

    /// Overwrite a book's fields; a missing id is a no-op
    pub async fn update_book(&self, id: Uuid, book: UpdateBook) -> AppResult<()> {
        if book.available_copies < 0 {
            return Err(AppError::BadRequest(
                "available_copies must not be negative".to_string(),
            ));
        }

        self.books.update(id, &book).await?;
        self.audit
            .record(format!("Updated book: {} (ID: {})", book.title, id));

        Ok(())
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.books.delete(id).await?;
        self.audit.record(format!("Deleted book with ID: {}", id));

        Ok(())
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.books
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    pub async fn all_books(&self) -> AppResult<Vec<Book>> {
        self.books.get_all().await
    }

    /// Page of books ordered by title
    pub async fn list_books(&self, page: u32, page_size: u32) -> AppResult<Vec<Book>> {
        super::validate_page(page, page_size)?;
        self.books.list(page, page_size).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.books.count().await
    }

    /// Flatten the full catalog to CSV
    pub async fn export_csv(&self) -> AppResult<String> {
        let books = self.books.get_all().await?;
        Ok(export::books_to_csv(&books))
    }
}
