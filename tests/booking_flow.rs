//! Booking checks run in a fixed order: each failure is reported only once
//! every earlier check passes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use carrental_web::availability::UnitSchedule;
use carrental_web::booking::{validate_booking, BookingContext, BookingError, BookingPolicy, BookingQuote};
use carrental_web::dates::{DateRange, DateRangeError};
use carrental_web::models::{Booking, User};
use carrental_web::pricing::RateCard;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn today() -> NaiveDate {
    date("2024-06-15")
}

fn user(expires: &str) -> User {
    User {
        user_id: 7,
        email: "driver@example.com".to_string(),
        name: "Driver".to_string(),
        expire_date: date(expires),
    }
}

fn existing_booking() -> Booking {
    Booking {
        book_id: 11,
        user_id: 7,
        car_id: 9,
        start_date: date("2024-07-02"),
        end_date: date("2024-07-04"),
        total_price: dec!(300),
        average_price: dec!(100),
    }
}

fn quote<'a>(start: &'a str, end: &'a str, total: Decimal, average: Decimal) -> BookingQuote<'a> {
    BookingQuote {
        start_date: start,
        end_date: end,
        total_price: total,
        average_price: average,
    }
}

fn context<'a>(user: &'a User, user_bookings: &'a [Booking], units: &'a [UnitSchedule]) -> BookingContext<'a> {
    BookingContext {
        user,
        user_bookings,
        car_id: 1,
        model_id: 3,
        rates: RateCard::new(dec!(100), dec!(80), dec!(60)),
        units,
    }
}

#[test]
fn test_each_check_reports_only_after_earlier_ones_pass() {
    let policy = BookingPolicy::default();
    let booked = vec![UnitSchedule::new(
        1,
        vec![DateRange::new(date("2024-07-03"), date("2024-07-03")).unwrap()],
    )];
    let free = vec![UnitSchedule::new(1, vec![])];
    let stale = quote("2024-07-01", "2024-07-03", dec!(250), dec!(83.33));

    // Everything is wrong; the reversed range wins
    let expired = user("2024-07-02");
    let mine = vec![existing_booking()];
    let err = validate_booking(
        &quote("2024-07-03", "2024-07-01", dec!(250), dec!(83.33)),
        &context(&expired, &mine, &booked),
        today(),
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, BookingError::Dates(DateRangeError::InvalidDateRange { .. })));

    // Valid range: the licence comes next
    let err = validate_booking(&stale, &context(&expired, &mine, &booked), today(), &policy).unwrap_err();
    assert!(matches!(err, BookingError::LicenseExpires { .. }));

    // Licence fixed: the user's own overlapping booking
    let driver = user("2030-01-01");
    let err = validate_booking(&stale, &context(&driver, &mine, &booked), today(), &policy).unwrap_err();
    assert_eq!(
        err,
        BookingError::UserConflict {
            conflicts: vec![existing_booking()]
        }
    );

    // No user conflict: every unit is taken on 2024-07-03
    let err = validate_booking(&stale, &context(&driver, &[], &booked), today(), &policy).unwrap_err();
    assert_eq!(err, BookingError::NoUnitAvailable { model_id: 3 });

    // A unit is free: the stale quote is the last thing left
    let err = validate_booking(&stale, &context(&driver, &[], &free), today(), &policy).unwrap_err();
    match err {
        BookingError::PriceMismatch { expected } => {
            assert_eq!(expected.total_price, dec!(300));
            assert_eq!(expected.average_price, dec!(100));
            assert_eq!(expected.days, 3);
        }
        other => panic!("expected a price mismatch, got {other:?}"),
    }

    let approved = validate_booking(
        &quote("2024-07-01", "2024-07-03", dec!(300), dec!(100)),
        &context(&driver, &[], &free),
        today(),
        &policy,
    )
    .unwrap();
    assert_eq!(approved.car_id, 1);
    assert_eq!(approved.pricing.total_price, dec!(300));
}

#[test]
fn test_rental_length_checked_before_licence() {
    let expired = user("2024-07-02");
    let units = vec![UnitSchedule::new(1, vec![])];

    let err = validate_booking(
        &quote("2024-07-01", "2024-12-31", dec!(1), dec!(1)),
        &context(&expired, &[], &units),
        today(),
        &BookingPolicy::default(),
    )
    .unwrap_err();
    assert_eq!(err, BookingError::RentalTooLong { max_days: 90 });
}
