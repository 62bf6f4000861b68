//! API handlers for Lectern REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;
pub mod stats;

use serde::Deserialize;
use utoipa::IntoParams;

/// Pagination query parameters shared by the list endpoints
#[derive(Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// Rows per page
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(20)
    }
}
