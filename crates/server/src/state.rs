use sea_orm::DatabaseConnection;

/// Shared application state: the process-wide connection pool, opened once
/// at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
