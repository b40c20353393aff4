// Repository implementations (data access layer)
// Adapters that implement the domain repository traits on PostgreSQL

pub mod postgres_author_repository;
pub mod postgres_book_repository;
pub mod postgres_category_repository;
mod rows;

pub use postgres_author_repository::PostgresAuthorRepository;
pub use postgres_book_repository::PostgresBookRepository;
pub use postgres_category_repository::PostgresCategoryRepository;

use crate::domain::repositories::RepositoryError;

/// Maps a sqlx error onto the repository error space
///
/// Unique and foreign-key violations become conflicts; everything else is a
/// database failure.
pub(crate) fn map_db_error(context: &str, err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(format!("{}: duplicate key", context));
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::Conflict(format!(
                "{}: row is referenced by or references another record",
                context
            ));
        }
    }

    RepositoryError::Database(format!("{}: {}", context, err))
}
