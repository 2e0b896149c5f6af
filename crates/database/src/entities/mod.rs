pub mod bookings;
pub mod customers;
pub mod destinations;
pub mod flights;
pub mod hotels;
pub mod package_contents;
pub mod payments;
pub mod reservations;
pub mod rooms;
pub mod seats;
pub mod services;
pub mod tickets;
pub mod travel_packages;
