//! Scanshelf Barcode Book Scanner
//!
//! A small Rust REST API server that records barcode-scanned books:
//! scans are enriched from an external catalog service, persisted, and
//! listed most-recent-first.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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
