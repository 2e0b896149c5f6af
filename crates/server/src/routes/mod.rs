pub mod bookings;
pub mod customers;
pub mod dashboard;
pub mod destinations;
pub mod health;
pub mod packages;
pub mod reports;
pub mod root;
pub mod services;
