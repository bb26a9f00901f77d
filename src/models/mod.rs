//! Database-backed domain models

mod booking;

pub use booking::{Booking, NewBooking};
