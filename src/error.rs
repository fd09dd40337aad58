//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::booking::BookingError;
use crate::dates::DateRangeError;
use crate::responses::ApiResponse;

/// PostgreSQL exclusion_violation
const EXCLUSION_VIOLATION: &str = "23P01";
/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Dates(#[from] DateRangeError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("User with ID {0} not found")]
    UserNotFound(i32),

    #[error("Car with ID {0} not found")]
    CarNotFound(i32),

    #[error("Booking with ID {0} not found")]
    BookingNotFound(i32),

    #[error("{0}")]
    Forbidden(String),

    #[error("Cannot cancel bookings that have already started")]
    CancellationNotAllowed,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// Stable error code sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Dates(_) => "INVALID_DATE_RANGE",
            AppError::Booking(e) => match e {
                BookingError::Dates(_) | BookingError::RentalTooLong { .. } | BookingError::TooFarInAdvance { .. } => {
                    "INVALID_DATE_RANGE"
                }
                BookingError::LicenseExpires { .. } => "INVALID_LICENSE_DATE",
                BookingError::UserConflict { .. } | BookingError::NoUnitAvailable { .. } => "BOOKING_CONFLICT",
                BookingError::PriceMismatch { .. } => "PRICE_MISMATCH",
            },
            AppError::UserNotFound(_) => "USER_NOT_FOUND",
            AppError::CarNotFound(_) => "CAR_NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(e) if is_booking_overlap(e) => "BOOKING_CONFLICT",
            AppError::BookingNotFound(_)
            | AppError::Forbidden(_)
            | AppError::CancellationNotAllowed
            | AppError::Database(_)
            | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Dates(_) | AppError::Booking(_) | AppError::Validation(_) | AppError::CancellationNotAllowed => {
                StatusCode::BAD_REQUEST
            }
            AppError::UserNotFound(_) | AppError::CarNotFound(_) | AppError::BookingNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Database(e) if is_booking_overlap(e) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to clients; internal details stay in the logs
    fn public_message(&self) -> String {
        match self {
            AppError::Database(e) if is_booking_overlap(e) => "Duplicate entry detected".to_string(),
            AppError::Database(_) => "Database error".to_string(),
            AppError::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }

    /// Extra payload for errors the client can act on
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Booking(BookingError::UserConflict { conflicts }) => Some(json!({ "booking_list": conflicts })),
            AppError::Booking(BookingError::PriceMismatch { expected }) => Some(json!({ "expected": expected })),
            _ => None,
        }
    }
}

/// Whether a database error is the bookings overlap guard firing
fn is_booking_overlap(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|e| e.code())
        .is_some_and(|code| code == EXCLUSION_VIOLATION || code == UNIQUE_VIOLATION)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Database(e) if !is_booking_overlap(e) => tracing::error!("Database error: {}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Booking(e @ (BookingError::UserConflict { .. } | BookingError::NoUnitAvailable { .. })) => {
                tracing::warn!("Booking rejected: {}", e)
            }
            other => tracing::debug!("Request rejected: {}", other),
        }

        let body = ApiResponse::<serde_json::Value> {
            success: false,
            data: self.details(),
            error: Some(self.code().to_string()),
            message: Some(self.public_message()),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
