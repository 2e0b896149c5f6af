use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures surfaced by the data access layer.
///
/// Missing rows are not errors here: reads return `Option` and the
/// derivation engine treats a vanished booking as a no-op.
#[derive(Debug, Error)]
pub enum DataError {
    /// Operator input rejected before any statement ran; state unchanged.
    #[error("validation: {0}")]
    Validation(String),

    /// The store refused the write (unique or foreign-key constraint).
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Constraint(msg),
            _ => Self::Db(err),
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;
