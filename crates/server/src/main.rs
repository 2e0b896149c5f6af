mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use database::db;
use database::services::seed::SeedService;
use log::info;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let url = db::database_url();
    let db = db::create_connection(&url)
        .await
        .expect("Failed to open database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    if SeedService::seed_if_empty(&db)
        .await
        .expect("Failed to seed database")
    {
        info!("Seeded reference dataset into empty store");
    }

    let app = Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route(
            "/customers",
            get(routes::customers::list_customers).post(routes::customers::create_customer),
        )
        .route(
            "/customers/{id}",
            put(routes::customers::update_customer).delete(routes::customers::delete_customer),
        )
        .route(
            "/destinations",
            get(routes::destinations::list_destinations)
                .post(routes::destinations::create_destination),
        )
        .route(
            "/destinations/{id}",
            put(routes::destinations::update_destination)
                .delete(routes::destinations::delete_destination),
        )
        .route(
            "/services",
            get(routes::services::list_services).post(routes::services::create_service),
        )
        .route(
            "/services/{id}",
            get(routes::services::get_service)
                .put(routes::services::update_service)
                .delete(routes::services::delete_service),
        )
        .route(
            "/packages",
            get(routes::packages::list_packages).post(routes::packages::create_package),
        )
        .route(
            "/packages/{id}",
            put(routes::packages::update_package).delete(routes::packages::delete_package),
        )
        .route(
            "/package-contents",
            get(routes::packages::list_package_contents)
                .post(routes::packages::add_package_content),
        )
        .route(
            "/package-contents/{id}",
            delete(routes::packages::remove_package_content),
        )
        .route(
            "/bookings",
            get(routes::bookings::list_bookings).post(routes::bookings::create_booking),
        )
        .route(
            "/bookings/{id}",
            put(routes::bookings::update_booking).delete(routes::bookings::delete_booking),
        )
        .route("/bookings/{id}/payments", post(routes::bookings::record_payment))
        .route("/reports/bookings", get(routes::reports::booking_report))
        .route("/reports/inventory", get(routes::reports::inventory_report))
        .route(
            "/reports/customer-spending",
            get(routes::reports::customer_spending),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc::ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("Running axum on http://localhost:3000");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown::shutdown_signal())
        .await
        .unwrap();
}
