//! Request DTOs for booking and search endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Search for models with a free unit
#[derive(Debug, Deserialize, Validate)]
pub struct SearchAvailableCarsRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    pub start_date: String,
    pub end_date: String,
    /// Driving licence expiry date
    pub expire_date: String,
}

/// Create a booking from a previously quoted search result
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "Car ID must be positive"))]
    pub car_id: i32,
    pub start_date: String,
    pub end_date: String,
    #[validate(custom(function = "positive_amount"))]
    pub total_price: Decimal,
    #[validate(custom(function = "positive_amount"))]
    pub average_price: Decimal,
}

/// Cancel a booking
#[derive(Debug, Deserialize, Validate)]
pub struct CancelBookingRequest {
    #[validate(range(min = 1, message = "User ID must be positive"))]
    pub user_id: i32,
}

fn positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount > Decimal::ZERO {
        return Ok(());
    }

    let mut error = ValidationError::new("positive");
    error.message = Some("Price must be positive".into());
    Err(error)
}
