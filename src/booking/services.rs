//! Booking service functions with database access.
//!
//! Each function fetches rows, hands plain values to the pure checks in
//! `flow`, then writes the outcome.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::cache::AppCache;
use crate::dates::{parse_date, DateRange};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::Booking;
use crate::pricing::{price_range, services as pricing_services};

use super::flow::{self, BookingContext, BookingError, BookingPolicy, BookingQuote};
use super::requests::{CreateBookingRequest, SearchAvailableCarsRequest};
use super::responses::{AvailableCarResponse, CarStatistics, SearchResponse, UserBookingsResponse};

/// Name given to users created by a search
const DEFAULT_USER_NAME: &str = "Default User";

/// Search models with a free unit and price them for the range.
///
/// Creates the user on first search and refreshes their licence expiry.
/// Rejects the search when the user already has a booking in the range.
pub async fn search_available_cars(
    pool: &PgPool,
    policy: &BookingPolicy,
    request: &SearchAvailableCarsRequest,
) -> Result<SearchResponse> {
    let range = DateRange::parse(&request.start_date, &request.end_date)?;
    flow::validate_length(&range, policy)?;
    let expire_date = parse_date(&request.expire_date)?;

    let user = db::find_or_create_user(pool, &request.email, DEFAULT_USER_NAME, expire_date).await?;

    if !user.licence_covers(range.end()) {
        return Err(BookingError::LicenseExpires {
            expires: user.expire_date,
            end: range.end(),
        }
        .into());
    }

    let bookings = db::get_user_bookings(pool, user.user_id).await?;
    let conflicts = flow::user_conflicts(&range, &bookings)?;
    if !conflicts.is_empty() {
        return Err(BookingError::UserConflict { conflicts }.into());
    }

    let available = db::find_available_models(pool, &range)
        .await?
        .into_iter()
        .map(|model| {
            let pricing = price_range(range, &model.rate_card());
            AvailableCarResponse::new(model, &pricing)
        })
        .collect();

    let booking_list = db::get_user_booking_details(pool, user.user_id).await?;

    Ok(SearchResponse {
        available,
        user_id: user.user_id,
        booking_list,
    })
}

/// Validate and store a booking.
///
/// The stored prices are the recomputed ones; the client's quote only has to
/// agree with them within the policy tolerance.
pub async fn create_booking(
    pool: &PgPool,
    cache: &AppCache,
    policy: &BookingPolicy,
    request: &CreateBookingRequest,
    today: NaiveDate,
) -> Result<Booking> {
    let range = flow::validate_range(&request.start_date, &request.end_date, today, policy)?;

    let (user, car) = tokio::try_join!(db::get_user(pool, request.user_id), db::get_car(pool, request.car_id))?;
    let model = pricing_services::get_car_model(pool, cache, car.model_id).await?;
    let (user_bookings, units) = tokio::try_join!(
        db::get_user_bookings(pool, user.user_id),
        db::get_model_units(pool, car.model_id, &range),
    )?;

    let quote = BookingQuote {
        start_date: &request.start_date,
        end_date: &request.end_date,
        total_price: request.total_price,
        average_price: request.average_price,
    };
    let ctx = BookingContext {
        user: &user,
        user_bookings: &user_bookings,
        car_id: car.car_id,
        model_id: car.model_id,
        rates: model.rate_card(),
        units: &units,
    };
    let approved = flow::validate_against(range, &quote, &ctx, policy)?;

    if approved.car_id != car.car_id {
        tracing::debug!(
            "Car {} is taken for {:?}, booking unit {} of model {} instead",
            car.car_id,
            range,
            approved.car_id,
            car.model_id
        );
    }

    let booking = db::insert_booking(pool, user.user_id, approved.car_id, &approved.range, &approved.pricing).await?;

    tracing::info!(
        "Booking {} created: user {} car {} {:?} total {}",
        booking.book_id,
        booking.user_id,
        booking.car_id,
        approved.range,
        booking.total_price
    );

    Ok(booking)
}

/// A user with their bookings
pub async fn get_user_with_bookings(pool: &PgPool, user_id: i32) -> Result<UserBookingsResponse> {
    let user = db::get_user(pool, user_id).await?;
    let bookings = db::get_user_booking_details(pool, user_id).await?;

    Ok(UserBookingsResponse { user, bookings })
}

/// Cancel a booking owned by `user_id` that has not started yet
pub async fn cancel_booking(pool: &PgPool, book_id: i32, user_id: i32, today: NaiveDate) -> Result<()> {
    let booking = db::get_booking(pool, book_id).await?;

    if booking.user_id != user_id {
        return Err(AppError::Forbidden("You can only cancel your own bookings".to_string()));
    }
    if !flow::can_cancel(&booking, today) {
        return Err(AppError::CancellationNotAllowed);
    }

    db::delete_booking(pool, book_id).await?;
    tracing::info!("Booking {} cancelled by user {}", book_id, user_id);

    Ok(())
}

/// Cars free and booked on `today`
pub async fn car_statistics(pool: &PgPool, today: NaiveDate) -> Result<CarStatistics> {
    let day = DateRange::day(today);
    let (total_cars, available_today) = tokio::try_join!(db::count_cars(pool), db::count_free_cars(pool, &day))?;

    Ok(CarStatistics {
        total_cars,
        available_today,
        booked_today: total_cars - available_today,
    })
}
