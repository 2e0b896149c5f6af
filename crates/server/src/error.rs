use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::error::DataError;
use log::error;
use sea_orm::DbErr;
use serde_json::json;

/// Failures rendered to the operator as a JSON body carrying the cause.
pub enum ApiError {
    Data(DataError),
    NotFound(&'static str),
}

impl ApiError {
    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound(what)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Data(DataError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg),
            Self::Data(DataError::Constraint(msg)) => {
                (StatusCode::CONFLICT, format!("constraint violation: {msg}"))
            }
            Self::Data(DataError::Db(err)) => {
                error!("database error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            Self::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        Self::Data(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Data(DataError::from(err))
    }
}
