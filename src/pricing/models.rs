//! Database models for pricing queries.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::season::Season;

/// Daily rates of a vehicle model, one per season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateCard {
    pub peak: Decimal,
    pub mid: Decimal,
    pub off: Decimal,
}

impl RateCard {
    pub fn new(peak: Decimal, mid: Decimal, off: Decimal) -> Self {
        Self { peak, mid, off }
    }

    /// Price of one day in the given season
    pub fn daily_rate(&self, season: Season) -> Decimal {
        match season {
            Season::Peak => self.peak,
            Season::Mid => self.mid,
            Season::Off => self.off,
        }
    }
}

/// CarModel from models
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarModel {
    pub model_id: i32,
    pub model_name: String,
    pub price_peak: Decimal,
    pub price_mid: Decimal,
    pub price_off: Decimal,
}

impl CarModel {
    pub fn rate_card(&self) -> RateCard {
        RateCard::new(self.price_peak, self.price_mid, self.price_off)
    }
}
