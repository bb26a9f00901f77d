//! In-memory caching using moka
//!
//! Holds issued quotes keyed by reference. A quote is a point-in-time
//! calculation; once the TTL lapses the customer re-prices rather than
//! reviving a stale figure, so there is no refresh path.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::quoting::models::QuoteRecord;

/// Application cache holding issued quotes
#[derive(Clone)]
pub struct AppCache {
    /// Issued quotes (reference -> QuoteRecord)
    pub quotes: Cache<String, Arc<QuoteRecord>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Quotes: 10k entries, 30 min TTL, no idle eviction (a quote
            // fetched at minute 29 still dies at minute 30)
            quotes: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(30 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.quotes.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}
