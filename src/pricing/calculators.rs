//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::dates::{DateRange, DateRangeError};

use super::models::RateCard;
use super::season::Season;

/// Round to specified decimal places, halves away from zero.
///
/// Prices are never negative, so this is ordinary half-up rounding.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use carrental_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(1.005), 2), dec!(1.01));
/// assert_eq!(round_money(dec!(73.3333), 2), dec!(73.33));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Result of pricing a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_price: Decimal,
    pub days: u32,
}

impl PricingResult {
    /// Whether a client-supplied quote agrees with this result.
    ///
    /// Both the total and the average must be within `tolerance`; a
    /// difference of exactly `tolerance` still matches.
    pub fn matches_quote(&self, total_price: Decimal, average_price: Decimal, tolerance: Decimal) -> bool {
        (self.total_price - total_price).abs() <= tolerance
            && (self.average_price - average_price).abs() <= tolerance
    }
}

/// Price an already validated range day by day.
pub fn price_range(range: DateRange, rates: &RateCard) -> PricingResult {
    let total: Decimal = range
        .iter_days()
        .map(|day| rates.daily_rate(Season::of(day)))
        .sum();
    let days = range.days();
    let average = total / Decimal::from(days);

    PricingResult {
        total_price: round_money(total, 2),
        average_price: round_money(average, 2),
        days,
    }
}

/// Price a range given as date strings.
///
/// Fails with [`DateRangeError::InvalidDateFormat`] when either date does not
/// parse and with [`DateRangeError::InvalidDateRange`] when `end < start`.
pub fn calculate_pricing(start: &str, end: &str, rates: &RateCard) -> Result<PricingResult, DateRangeError> {
    let range = DateRange::parse(start, end)?;
    Ok(price_range(range, rates))
}
