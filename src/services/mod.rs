//! Business logic services

pub mod catalog;
pub mod loans;
pub mod members;

use std::sync::Arc;

use crate::{
    audit::AuditLog,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, audit: Arc<AuditLog>) -> Self {
        let books = Arc::new(repository.books.clone());
        let member_store = Arc::new(repository.members.clone());
        let borrows = Arc::new(repository.borrows.clone());

        Self {
            catalog: catalog::CatalogService::new(books.clone(), audit.clone()),
            members: members::MembersService::new(member_store, audit.clone()),
            loans: loans::LoansService::new(books, borrows, audit),
        }
    }
}

/// Pages are 1-based; zero pages or zero-sized pages are caller mistakes.
fn validate_page(page: u32, page_size: u32) -> AppResult<()> {
    if page < 1 {
        return Err(AppError::BadRequest("page must be at least 1".to_string()));
    }
    if page_size < 1 {
        return Err(AppError::BadRequest(
            "page_size must be at least 1".to_string(),
        ));
    }
    Ok(())
}
