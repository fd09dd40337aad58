//! Response DTOs for pricing endpoints.

use chrono::NaiveDate;
use serde::Serialize;

/// Season of a single day
#[derive(Debug, Serialize)]
pub struct SeasonResponse {
    pub date: NaiveDate,
    pub season: &'static str,
}
