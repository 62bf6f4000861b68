//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Copies currently available to lend, never negative
    pub available_copies: i32,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Defaults to 1 when omitted
    pub available_copies: Option<i32>,
}

impl CreateBook {
    pub fn initial_copies(&self) -> i32 {
        self.available_copies.unwrap_or(1)
    }
}

/// Update book request, overwrites all mutable fields
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available_copies: i32,
}
