//! Database row models

mod booking;
mod car;
mod user;

pub use booking::{Booking, BookingDetail};
pub use car::{AvailableModel, Car};
pub use user::User;
