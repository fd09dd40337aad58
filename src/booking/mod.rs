//! Booking module.
//!
//! `flow` holds the pure validation steps; `services` loads what they need
//! from the database and stores the result.

pub mod flow;
pub mod requests;
pub mod responses;
pub mod services;

pub use flow::{
    can_cancel, user_conflicts, validate_against, validate_booking, validate_length, validate_range, ApprovedBooking,
    BookingContext, BookingError, BookingPolicy, BookingQuote,
};
