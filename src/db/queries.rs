//! Database queries for users, cars and bookings
//!
//! Every date filter uses the same three-clause overlap predicate as
//! `availability::overlaps`, with `$1..$2` as the candidate range.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;
use std::collections::BTreeMap;

use crate::availability::UnitSchedule;
use crate::dates::DateRange;
use crate::error::{AppError, Result};
use crate::models::{AvailableModel, Booking, BookingDetail, Car, User};
use crate::pricing::PricingResult;

// ==================== users ====================

/// Get a user by id
pub async fn get_user(pool: &PgPool, user_id: i32) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, email, name, expire_date
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::UserNotFound(user_id))
}

/// Find a user by email, creating it when missing.
///
/// An existing user whose stored licence expiry differs from `expire_date`
/// is updated.
pub async fn find_or_create_user(pool: &PgPool, email: &str, name: &str, expire_date: NaiveDate) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, expire_date)
        VALUES ($1, $2, $3)
        ON CONFLICT (email) DO UPDATE
            SET expire_date = EXCLUDED.expire_date
        RETURNING user_id, email, name, expire_date
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(expire_date)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// All bookings of a user
pub async fn get_user_bookings(pool: &PgPool, user_id: i32) -> Result<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT book_id, user_id, car_id, start_date, end_date, total_price, average_price
        FROM bookings
        WHERE user_id = $1
        ORDER BY start_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Bookings of a user with car and model names, newest start first
pub async fn get_user_booking_details(pool: &PgPool, user_id: i32) -> Result<Vec<BookingDetail>> {
    let bookings = sqlx::query_as::<_, BookingDetail>(
        r#"
        SELECT
            b.book_id, b.user_id, b.car_id, b.start_date, b.end_date,
            b.total_price, b.average_price,
            c.brand, m.model_name
        FROM bookings b
        JOIN cars c ON c.car_id = b.car_id
        JOIN models m ON m.model_id = c.model_id
        WHERE b.user_id = $1
        ORDER BY b.start_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

// ==================== cars ====================

/// Get a car by id
pub async fn get_car(pool: &PgPool, car_id: i32) -> Result<Car> {
    sqlx::query_as::<_, Car>(
        r#"
        SELECT car_id, brand, model_id
        FROM cars
        WHERE car_id = $1
        "#,
    )
    .bind(car_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::CarNotFound(car_id))
}

/// Every unit of a model with the bookings that could touch `range`.
///
/// Bookings that ended before the range starts are left out; they can never
/// overlap it.
pub async fn get_model_units(pool: &PgPool, model_id: i32, range: &DateRange) -> Result<Vec<UnitSchedule>> {
    let rows: Vec<(i32, Option<NaiveDate>, Option<NaiveDate>)> = sqlx::query_as(
        r#"
        SELECT c.car_id, b.start_date, b.end_date
        FROM cars c
        LEFT JOIN bookings b ON b.car_id = c.car_id AND b.end_date >= $2
        WHERE c.model_id = $1
        ORDER BY c.car_id, b.start_date
        "#,
    )
    .bind(model_id)
    .bind(range.start())
    .fetch_all(pool)
    .await?;

    let mut units: BTreeMap<i32, Vec<DateRange>> = BTreeMap::new();
    for (car_id, start, end) in rows {
        let booked = units.entry(car_id).or_default();
        if let (Some(start), Some(end)) = (start, end) {
            let range = DateRange::new(start, end)
                .map_err(|e| AppError::Internal(format!("corrupt booking on car {car_id}: {e}")))?;
            booked.push(range);
        }
    }

    Ok(units
        .into_iter()
        .map(|(car_id, booked)| UnitSchedule::new(car_id, booked))
        .collect())
}

/// Models that still have a unit free for the whole range.
///
/// `car_id` is the lowest free unit and `count` the number of free units.
pub async fn find_available_models(pool: &PgPool, range: &DateRange) -> Result<Vec<AvailableModel>> {
    let models = sqlx::query_as::<_, AvailableModel>(
        r#"
        SELECT
            MIN(c.car_id) AS car_id,
            c.brand,
            c.model_id,
            m.model_name,
            m.price_peak,
            m.price_mid,
            m.price_off,
            COUNT(c.car_id) AS count
        FROM cars c
        JOIN models m ON m.model_id = c.model_id
        WHERE c.car_id NOT IN (
            SELECT b.car_id
            FROM bookings b
            WHERE ($1 <= b.start_date AND $2 >= b.start_date)
               OR ($1 <= b.end_date AND $2 >= b.end_date)
               OR ($1 >= b.start_date AND $2 <= b.end_date)
        )
        GROUP BY c.model_id, c.brand, m.model_name, m.price_peak, m.price_mid, m.price_off
        ORDER BY c.model_id
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_all(pool)
    .await?;

    Ok(models)
}

/// Count all cars
pub async fn count_cars(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Count cars with no booking overlapping the range
pub async fn count_free_cars(pool: &PgPool, range: &DateRange) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM cars c
        WHERE NOT EXISTS (
            SELECT 1
            FROM bookings b
            WHERE b.car_id = c.car_id
              AND (($1 <= b.start_date AND $2 >= b.start_date)
                OR ($1 <= b.end_date AND $2 >= b.end_date)
                OR ($1 >= b.start_date AND $2 <= b.end_date))
        )
        "#,
    )
    .bind(range.start())
    .bind(range.end())
    .fetch_one(pool)
    .await?;

    Ok(count)
}

// ==================== bookings ====================

/// Get a booking by id
pub async fn get_booking(pool: &PgPool, book_id: i32) -> Result<Booking> {
    sqlx::query_as::<_, Booking>(
        r#"
        SELECT book_id, user_id, car_id, start_date, end_date, total_price, average_price
        FROM bookings
        WHERE book_id = $1
        "#,
    )
    .bind(book_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::BookingNotFound(book_id))
}

/// Get a booking with car and model names
pub async fn get_booking_detail(pool: &PgPool, book_id: i32) -> Result<BookingDetail> {
    sqlx::query_as::<_, BookingDetail>(
        r#"
        SELECT
            b.book_id, b.user_id, b.car_id, b.start_date, b.end_date,
            b.total_price, b.average_price,
            c.brand, m.model_name
        FROM bookings b
        JOIN cars c ON c.car_id = b.car_id
        JOIN models m ON m.model_id = c.model_id
        WHERE b.book_id = $1
        "#,
    )
    .bind(book_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::BookingNotFound(book_id))
}

/// Store a booking.
///
/// The `bookings_no_unit_overlap` constraint rejects a unit that was booked
/// concurrently; that surfaces as a database error mapped to a conflict.
pub async fn insert_booking(
    pool: &PgPool,
    user_id: i32,
    car_id: i32,
    range: &DateRange,
    pricing: &PricingResult,
) -> Result<Booking> {
    let booking = sqlx::query_as::<_, Booking>(
        r#"
        INSERT INTO bookings (user_id, car_id, start_date, end_date, total_price, average_price)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING book_id, user_id, car_id, start_date, end_date, total_price, average_price
        "#,
    )
    .bind(user_id)
    .bind(car_id)
    .bind(range.start())
    .bind(range.end())
    .bind(pricing.total_price)
    .bind(pricing.average_price)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

/// Delete a booking
pub async fn delete_booking(pool: &PgPool, book_id: i32) -> Result<()> {
    let result = sqlx::query("DELETE FROM bookings WHERE book_id = $1")
        .bind(book_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::BookingNotFound(book_id));
    }
    Ok(())
}

/// Booking counts relative to a day
#[derive(Debug, Clone, Serialize)]
pub struct BookingStatistics {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub upcoming_bookings: i64,
    pub completed_bookings: i64,
}

/// Count bookings that are running, upcoming or finished on `today`
pub async fn booking_statistics(pool: &PgPool, today: NaiveDate) -> Result<BookingStatistics> {
    let (total_bookings, active_bookings, upcoming_bookings, completed_bookings): (i64, i64, i64, i64) =
        sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE start_date <= $1 AND end_date >= $1),
                COUNT(*) FILTER (WHERE start_date > $1),
                COUNT(*) FILTER (WHERE end_date < $1)
            FROM bookings
            "#,
        )
        .bind(today)
        .fetch_one(pool)
        .await?;

    Ok(BookingStatistics {
        total_bookings,
        active_bookings,
        upcoming_bookings,
        completed_bookings,
    })
}
