//! In-memory caching using moka
//!
//! Rate cards change rarely and are read on every booking, so they are kept
//! in memory for a few minutes.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::pricing::CarModel;

/// Application cache holding vehicle models and their rate cards
#[derive(Clone)]
pub struct AppCache {
    /// Vehicle models (model_id -> CarModel)
    pub models: Cache<i32, Arc<CarModel>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Models: 500 entries, 10 min TTL
            models: Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(10 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            models_size: self.models.entry_count(),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub models_size: u64,
}
