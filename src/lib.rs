//! MoveVan quote engine and booking API.

use std::sync::Arc;

use sqlx::PgPool;

pub mod cache;
pub mod db;
pub mod error;
pub mod models;
pub mod quoting;
pub mod routes;

use cache::AppCache;
use quoting::QuoteEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub engine: Arc<QuoteEngine>,
}
