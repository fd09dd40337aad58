//! Environment configuration

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::booking::BookingPolicy;

/// Runtime configuration read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    /// Reported by the health check
    pub environment: String,
    pub run_migrations: bool,
    pub policy: BookingPolicy,
}

impl Config {
    /// Load from the process environment after reading `.env` if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let defaults = BookingPolicy::default();

        Ok(Self {
            database_url,
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            policy: BookingPolicy {
                max_advance_days: parse_or(&lookup, "MAX_ADVANCE_DAYS", defaults.max_advance_days)?,
                max_rental_days: parse_or(&lookup, "MAX_RENTAL_DAYS", defaults.max_rental_days)?,
                price_tolerance: parse_or::<Decimal, _>(&lookup, "PRICE_TOLERANCE", defaults.price_tolerance)?,
            },
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/cars")])).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/cars");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.environment, "development");
        assert!(config.run_migrations);
        assert_eq!(config.policy.max_advance_days, 365);
        assert_eq!(config.policy.max_rental_days, 90);
        assert_eq!(config.policy.price_tolerance, dec!(0.01));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/cars"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("APP_ENV", "production"),
            ("MAX_ADVANCE_DAYS", "30"),
            ("MAX_RENTAL_DAYS", "14"),
            ("PRICE_TOLERANCE", "0.05"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.environment, "production");
        assert_eq!(config.policy.max_advance_days, 30);
        assert_eq!(config.policy.max_rental_days, 14);
        assert_eq!(config.policy.price_tolerance, dec!(0.05));
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_missing_database_url() {
        assert!(Config::from_lookup(lookup(&[])).is_err());
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/cars"),
            ("MAX_ADVANCE_DAYS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("MAX_ADVANCE_DAYS"));
    }
}
