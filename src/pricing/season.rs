//! Calendar season classification.
//!
//! Seasons depend on the month and day only, so the same calendar day maps to
//! the same season in every year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Inclusive (month, day) bounds of the peak season.
const PEAK: ((u32, u32), (u32, u32)) = ((6, 1), (9, 15));

/// Inclusive (month, day) bounds of the autumn mid season.
const MID_AUTUMN: ((u32, u32), (u32, u32)) = ((9, 15), (10, 31));

/// Inclusive (month, day) bounds of the spring mid season.
const MID_SPRING: ((u32, u32), (u32, u32)) = ((3, 1), (5, 31));

/// Pricing season of a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Peak,
    Mid,
    Off,
}

impl Season {
    /// Classify a calendar day.
    ///
    /// Peak is checked before Mid, so September 15th (the last peak day and
    /// the first autumn mid day) is Peak.
    pub fn of(date: NaiveDate) -> Self {
        let month_day = (date.month(), date.day());

        if in_range(month_day, PEAK) {
            Season::Peak
        } else if in_range(month_day, MID_AUTUMN) || in_range(month_day, MID_SPRING) {
            Season::Mid
        } else {
            Season::Off
        }
    }

    /// Capitalized display name
    pub fn name(self) -> &'static str {
        match self {
            Season::Peak => "Peak",
            Season::Mid => "Mid",
            Season::Off => "Off",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn in_range(month_day: (u32, u32), (from, to): ((u32, u32), (u32, u32))) -> bool {
    from <= month_day && month_day <= to
}

/// Display name of the season a date falls into.
pub fn season_name(date: NaiveDate) -> &'static str {
    Season::of(date).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_peak_season_bounds() {
        assert_eq!(Season::of(date(2024, 5, 31)), Season::Mid);
        assert_eq!(Season::of(date(2024, 6, 1)), Season::Peak);
        assert_eq!(Season::of(date(2024, 7, 15)), Season::Peak);
        assert_eq!(Season::of(date(2024, 9, 14)), Season::Peak);
    }

    #[test]
    fn test_september_15_is_peak_not_mid() {
        // Both the peak and the autumn mid range include 09-15; peak wins.
        assert_eq!(Season::of(date(2023, 9, 15)), Season::Peak);
        assert_eq!(Season::of(date(2024, 9, 15)), Season::Peak);
        assert_eq!(Season::of(date(2024, 9, 16)), Season::Mid);
    }

    #[test]
    fn test_mid_season_bounds() {
        assert_eq!(Season::of(date(2024, 10, 31)), Season::Mid);
        assert_eq!(Season::of(date(2024, 11, 1)), Season::Off);
        assert_eq!(Season::of(date(2024, 2, 29)), Season::Off);
        assert_eq!(Season::of(date(2024, 3, 1)), Season::Mid);
        assert_eq!(Season::of(date(2023, 2, 28)), Season::Off);
        assert_eq!(Season::of(date(2023, 3, 1)), Season::Mid);
    }

    #[test]
    fn test_off_season_across_new_year() {
        assert_eq!(Season::of(date(2023, 12, 31)), Season::Off);
        assert_eq!(Season::of(date(2024, 1, 1)), Season::Off);
    }

    #[test]
    fn test_season_is_year_independent() {
        assert_eq!(Season::of(date(2023, 7, 1)), Season::of(date(2024, 7, 1)));
        assert_eq!(Season::of(date(1999, 7, 1)), Season::Peak);
        assert_eq!(Season::of(date(2100, 7, 1)), Season::Peak);
    }

    #[test]
    fn test_season_name() {
        assert_eq!(season_name(date(2024, 7, 1)), "Peak");
        assert_eq!(season_name(date(2024, 4, 1)), "Mid");
        assert_eq!(season_name(date(2024, 1, 1)), "Off");
        assert_eq!(Season::Mid.to_string(), "Mid");
    }
}
