use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

/// Resolve the database URL from the environment, falling back to a local
/// store file created on first use.
pub fn database_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://travel_booking.db?mode=rwc".to_string())
}

/// Creates the process-wide database connection pool.
///
/// Pool sized for SQLite, where writes serialize on the file lock.
pub async fn create_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(url);
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    Database::connect(opt).await
}
