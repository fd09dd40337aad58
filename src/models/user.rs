//! Customer model

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// User from users
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub name: String,
    /// Driving licence expiry date
    pub expire_date: NaiveDate,
}

impl User {
    /// Whether the licence is still valid on the last day of a booking
    pub fn licence_covers(&self, end_date: NaiveDate) -> bool {
        self.expire_date >= end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_licence_covers_last_day() {
        let user = User {
            user_id: 1,
            email: "driver@example.com".to_string(),
            name: "Driver".to_string(),
            expire_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        };
        assert!(user.licence_covers(NaiveDate::from_ymd_opt(2024, 7, 9).unwrap()));
        assert!(user.licence_covers(NaiveDate::from_ymd_opt(2024, 7, 10).unwrap()));
        assert!(!user.licence_covers(NaiveDate::from_ymd_opt(2024, 7, 11).unwrap()));
    }
}
