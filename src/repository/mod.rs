pub mod booking;
pub mod spot;

pub use booking::{BookingRepository, StoreBookingRepository};
pub use spot::{SpotRepository, StoreSpotRepository};
