use crate::routes::{
    bookings, customers, dashboard, destinations, health, packages, reports, root, services,
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        dashboard::get_dashboard,
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        destinations::list_destinations,
        destinations::create_destination,
        destinations::update_destination,
        destinations::delete_destination,
        services::list_services,
        services::create_service,
        services::get_service,
        services::update_service,
        services::delete_service,
        packages::list_packages,
        packages::create_package,
        packages::update_package,
        packages::delete_package,
        packages::list_package_contents,
        packages::add_package_content,
        packages::remove_package_content,
        bookings::list_bookings,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        bookings::record_payment,
        reports::booking_report,
        reports::inventory_report,
        reports::customer_spending
    ),
    tags(
        (name = "Dashboard", description = "System overview metrics"),
        (name = "Customers", description = "Customer management"),
        (name = "Destinations", description = "Destination management"),
        (name = "Services", description = "Flight and hotel catalog"),
        (name = "Packages", description = "Travel packages and their contents"),
        (name = "Bookings", description = "Bookings and payments"),
        (name = "Reports", description = "Read-only aggregate reports"),
    ),
    info(
        title = "Travel Booking API",
        version = "1.0.0",
        description = "Travel booking administration API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
