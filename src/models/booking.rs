//! Booking models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::dates::{DateRange, DateRangeError};

/// Booking from bookings
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Booking {
    pub book_id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_price: Decimal,
}

impl Booking {
    /// Booked days. Rows are stored with `start_date <= end_date`.
    pub fn range(&self) -> Result<DateRange, DateRangeError> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Booking joined with its car and model, for listings
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingDetail {
    pub book_id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_price: Decimal,
    pub brand: String,
    pub model_name: String,
}
