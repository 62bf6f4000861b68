//! Member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Member model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create member request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Update member request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}
