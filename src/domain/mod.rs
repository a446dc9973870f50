mod auth;
mod booking;

pub use auth::{AuthCredentials, AuthToken};
pub(crate) use auth::AuthRequest;
pub use booking::{Booking, BookingDates, BookingId, BookingQuery, CreatedBooking};
