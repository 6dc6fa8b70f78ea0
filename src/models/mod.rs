pub mod booking;
pub mod notice;
pub mod spot;
pub mod vehicle;
