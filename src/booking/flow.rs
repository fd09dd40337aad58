//! Booking validation.
//!
//! Runs the booking checks in a fixed order over data the caller has
//! already loaded:
//!
//! 1. the date range (format, order, length, advance window)
//! 2. the driving licence covers the whole booking
//! 3. the user has no overlapping booking
//! 4. some unit of the requested model is free
//! 5. the client's quote matches the recomputed price

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::availability::{conflicting, find_free_unit, UnitSchedule};
use crate::dates::{DateRange, DateRangeError};
use crate::models::{Booking, User};
use crate::pricing::{price_range, PricingResult, RateCard};

/// Policy knobs of the booking flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    /// How many days after today a booking may start
    pub max_advance_days: i64,
    /// Longest rental, in days
    pub max_rental_days: u32,
    /// Absolute tolerance when comparing client quotes
    pub price_tolerance: Decimal,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            max_advance_days: 365,
            max_rental_days: 90,
            price_tolerance: Decimal::new(1, 2), // 0.01
        }
    }
}

/// Booking rejection reasons
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error(transparent)]
    Dates(#[from] DateRangeError),

    #[error("Bookings cannot be made more than {max_days} days in advance")]
    TooFarInAdvance { max_days: i64 },

    #[error("Bookings cannot be longer than {max_days} days")]
    RentalTooLong { max_days: u32 },

    #[error("Driving license expires before the end of booking period")]
    LicenseExpires { expires: NaiveDate, end: NaiveDate },

    #[error("You already have a booking for these dates")]
    UserConflict { conflicts: Vec<Booking> },

    #[error("This car is not available for the selected dates")]
    NoUnitAvailable { model_id: i32 },

    #[error("Price validation failed. Please refresh and try again.")]
    PriceMismatch { expected: PricingResult },
}

/// What the client asked for
#[derive(Debug, Clone)]
pub struct BookingQuote<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub total_price: Decimal,
    pub average_price: Decimal,
}

/// Everything the later checks need, loaded for one request
#[derive(Debug, Clone)]
pub struct BookingContext<'a> {
    pub user: &'a User,
    /// Bookings of the user, any dates
    pub user_bookings: &'a [Booking],
    /// Requested car; preferred when it is free
    pub car_id: i32,
    pub model_id: i32,
    pub rates: RateCard,
    /// Every unit of the requested model with its bookings
    pub units: &'a [UnitSchedule],
}

/// A booking that passed every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovedBooking {
    pub range: DateRange,
    /// Unit to book; the requested car unless it was taken
    pub car_id: i32,
    pub pricing: PricingResult,
}

/// Reject ranges longer than the policy allows.
///
/// Runs before any pricing so a huge range is never iterated day by day.
pub fn validate_length(range: &DateRange, policy: &BookingPolicy) -> Result<(), BookingError> {
    if range.days() > policy.max_rental_days {
        return Err(BookingError::RentalTooLong {
            max_days: policy.max_rental_days,
        });
    }
    Ok(())
}

/// Step 1: parse the range, then enforce its length and the advance window.
pub fn validate_range(
    start_date: &str,
    end_date: &str,
    today: NaiveDate,
    policy: &BookingPolicy,
) -> Result<DateRange, BookingError> {
    let range = DateRange::parse(start_date, end_date)?;
    validate_length(&range, policy)?;

    if (range.start() - today).num_days() > policy.max_advance_days {
        return Err(BookingError::TooFarInAdvance {
            max_days: policy.max_advance_days,
        });
    }

    Ok(range)
}

/// Steps 2-5 for a range that already passed [`validate_range`].
pub fn validate_against(
    range: DateRange,
    quote: &BookingQuote<'_>,
    ctx: &BookingContext<'_>,
    policy: &BookingPolicy,
) -> Result<ApprovedBooking, BookingError> {
    if !ctx.user.licence_covers(range.end()) {
        return Err(BookingError::LicenseExpires {
            expires: ctx.user.expire_date,
            end: range.end(),
        });
    }

    let conflicts = user_conflicts(&range, ctx.user_bookings)?;
    if !conflicts.is_empty() {
        return Err(BookingError::UserConflict { conflicts });
    }

    let car_id = find_free_unit(&range, ctx.units, Some(ctx.car_id)).ok_or(BookingError::NoUnitAvailable {
        model_id: ctx.model_id,
    })?;

    let pricing = price_range(range, &ctx.rates);
    if !pricing.matches_quote(quote.total_price, quote.average_price, policy.price_tolerance) {
        return Err(BookingError::PriceMismatch { expected: pricing });
    }

    Ok(ApprovedBooking { range, car_id, pricing })
}

/// All five steps in order.
pub fn validate_booking(
    quote: &BookingQuote<'_>,
    ctx: &BookingContext<'_>,
    today: NaiveDate,
    policy: &BookingPolicy,
) -> Result<ApprovedBooking, BookingError> {
    let range = validate_range(quote.start_date, quote.end_date, today, policy)?;
    validate_against(range, quote, ctx, policy)
}

/// Bookings of the user that overlap the range
pub fn user_conflicts(range: &DateRange, bookings: &[Booking]) -> Result<Vec<Booking>, DateRangeError> {
    let booked = bookings
        .iter()
        .map(|booking| booking.range().map(|r| (booking, r)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(conflicting(range, &booked, |(_, r)| *r)
        .into_iter()
        .map(|(booking, _)| (*booking).clone())
        .collect())
}

/// Whether a booking may still be cancelled on `today`.
///
/// A booking that starts today has already started.
pub fn can_cancel(booking: &Booking, today: NaiveDate) -> bool {
    booking.start_date > today
}
