//! Lectern Library Management System
//!
//! A Rust server for managing a library's book catalog, member roster and
//! borrow/return ledger, exposed as a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
