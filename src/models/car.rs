//! Fleet models

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::pricing::RateCard;

/// A physical car from cars
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub car_id: i32,
    pub brand: String,
    pub model_id: i32,
}

/// One row of the availability search: a model with at least one free unit
#[derive(Debug, Clone, FromRow)]
pub struct AvailableModel {
    /// Lowest free unit of the model
    pub car_id: i32,
    pub brand: String,
    pub model_id: i32,
    pub model_name: String,
    pub price_peak: Decimal,
    pub price_mid: Decimal,
    pub price_off: Decimal,
    /// Free units of the model
    pub count: i64,
}

impl AvailableModel {
    pub fn rate_card(&self) -> RateCard {
        RateCard::new(self.price_peak, self.price_mid, self.price_off)
    }
}
