//! Response DTOs for booking and search endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AvailableModel, BookingDetail, User};
use crate::pricing::PricingResult;

/// One bookable model in a search result
#[derive(Debug, Clone, Serialize)]
pub struct AvailableCarResponse {
    pub car_id: i32,
    pub brand: String,
    pub model_name: String,
    pub model_id: i32,
    /// Free units of the model
    pub count: i64,
    /// Two-decimal string, e.g. `"220.00"`
    pub total_price: String,
    pub average_price: String,
}

impl AvailableCarResponse {
    pub fn new(model: AvailableModel, pricing: &PricingResult) -> Self {
        Self {
            car_id: model.car_id,
            brand: model.brand,
            model_name: model.model_name,
            model_id: model.model_id,
            count: model.count,
            total_price: format_money(pricing.total_price),
            average_price: format_money(pricing.average_price),
        }
    }
}

/// Search result for a user
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub available: Vec<AvailableCarResponse>,
    pub user_id: i32,
    pub booking_list: Vec<BookingDetail>,
}

/// A user together with their bookings
#[derive(Debug, Serialize)]
pub struct UserBookingsResponse {
    pub user: User,
    pub bookings: Vec<BookingDetail>,
}

/// Fleet usage on one day
#[derive(Debug, Serialize)]
pub struct CarStatistics {
    pub total_cars: i64,
    pub available_today: i64,
    pub booked_today: i64,
}

fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}
