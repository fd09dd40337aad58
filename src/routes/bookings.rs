//! Booking handlers

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::booking::requests::{CancelBookingRequest, CreateBookingRequest};
use crate::booking::responses::UserBookingsResponse;
use crate::booking::services;
use crate::db::{self, BookingStatistics};
use crate::error::Result;
use crate::models::BookingDetail;
use crate::responses::ApiResponse;
use crate::AppState;

use super::extract::{ValidatedJson, ValidatedPath};

/// Create a booking; responds with the user and all their bookings
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserBookingsResponse>>)> {
    services::create_booking(&state.db, &state.cache, &state.config.policy, &request, state.today()).await?;
    let updated = services::get_user_with_bookings(&state.db, request.user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(updated).with_message("Booking created successfully")),
    ))
}

/// Bookings of a user, newest start first
pub async fn user_bookings(
    State(state): State<AppState>,
    ValidatedPath(user_id): ValidatedPath<i32>,
) -> Result<Json<ApiResponse<Vec<BookingDetail>>>> {
    let bookings = db::get_user_booking_details(&state.db, user_id).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// One booking
pub async fn detail(
    State(state): State<AppState>,
    ValidatedPath(book_id): ValidatedPath<i32>,
) -> Result<Json<ApiResponse<BookingDetail>>> {
    let booking = db::get_booking_detail(&state.db, book_id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// Cancel a booking that has not started
pub async fn cancel(
    State(state): State<AppState>,
    ValidatedPath(book_id): ValidatedPath<i32>,
    ValidatedJson(request): ValidatedJson<CancelBookingRequest>,
) -> Result<Json<ApiResponse<()>>> {
    services::cancel_booking(&state.db, book_id, request.user_id, state.today()).await?;
    Ok(Json(ApiResponse::message("Booking cancelled successfully")))
}

/// Booking counts relative to today
pub async fn statistics(State(state): State<AppState>) -> Result<Json<ApiResponse<BookingStatistics>>> {
    let stats = db::booking_statistics(&state.db, state.today()).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
