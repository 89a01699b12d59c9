//! Shared Diesel error mapping for repositories with basic query semantics.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.message().to_owned())
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Closed connections are reported as connection failures; everything else,
/// including constraint violations, is a query failure.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            query("pet name rejected by database constraint")
        }
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::PetNameRepositoryError;
    use rstest::rstest;

    fn map(error: diesel::result::Error) -> PetNameRepositoryError {
        map_basic_diesel_error(
            error,
            PetNameRepositoryError::query,
            PetNameRepositoryError::connection,
        )
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        assert_eq!(
            map(diesel::result::Error::NotFound),
            PetNameRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn rollback_maps_to_generic_query_error() {
        assert_eq!(
            map(diesel::result::Error::RollbackTransaction),
            PetNameRepositoryError::query("database error")
        );
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let err: PetNameRepositoryError = map_basic_pool_error(
            PoolError::Checkout("timed out".into()),
            PetNameRepositoryError::connection,
        );
        assert_eq!(err, PetNameRepositoryError::connection("timed out"));
    }
}
