//! Car rental booking service.
//!
//! The seasonal pricer (`pricing`) and the overlap checks (`availability`)
//! are pure. `booking`, `db` and `routes` wire them to PostgreSQL and HTTP.

pub mod availability;
pub mod booking;
pub mod cache;
pub mod config;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod responses;
pub mod routes;

use chrono::{Local, NaiveDate};
use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::AppCache;
use crate::config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            cache: AppCache::new(),
            config: Arc::new(config),
        }
    }

    /// Current local calendar day
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
