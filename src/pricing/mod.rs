//! Pricing engine module.
//!
//! Seasonal day-by-day pricing of rental periods. The calculators are pure;
//! `services` adds the cached model lookups.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod responses;
pub mod season;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_pricing, price_range, round_money, PricingResult};
pub use models::{CarModel, RateCard};
pub use season::{season_name, Season};
