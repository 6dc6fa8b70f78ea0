pub mod api;
pub mod booking;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod geo;
pub mod models;
pub mod observability;
pub mod repository;
pub mod state;
pub mod store;
