//! Mapping from SeaORM errors to repository errors.

use sea_orm::{DbErr, SqlErr};

use postboard_core::error::RepoError;

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(violation) = err.sql_err().and_then(constraint_violation) {
        return violation;
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn constraint_violation(err: SqlErr) -> Option<RepoError> {
    match err {
        SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg) => {
            Some(RepoError::Constraint(msg))
        }
        _ => None,
    }
}
