use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use super::rows::{BookDetailsRow, BookRow, BOOK_COLUMNS, BOOK_DETAILS_SELECT};
use crate::domain::book::{Book, BookDetails};
use crate::domain::repositories::{BookRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of BookRepository
///
/// Reads join `authors` and `categories` so every returned book carries
/// both related records.
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    /// Creates a new PostgresBookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn details_from_rows(rows: Vec<BookDetailsRow>) -> RepositoryResult<Vec<BookDetails>> {
    rows.into_iter().map(BookDetails::try_from).collect()
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<BookDetails>> {
        let sql = format!("{} ORDER BY b.isdn", BOOK_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BookDetailsRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list books", e))?;

        details_from_rows(rows)
    }

    async fn find_by_isdn(&self, isdn: &str) -> RepositoryResult<Option<BookDetails>> {
        let sql = format!("{} WHERE b.isdn = $1", BOOK_DETAILS_SELECT);
        let row = sqlx::query_as::<_, BookDetailsRow>(&sql)
            .bind(isdn)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find book by isdn", e))?;

        row.map(BookDetails::try_from).transpose()
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<BookDetails>> {
        let sql = format!(
            "{} WHERE b.category_id = $1 ORDER BY b.isdn",
            BOOK_DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, BookDetailsRow>(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find books by category", e))?;

        details_from_rows(rows)
    }

    async fn create(&self, book: Book) -> RepositoryResult<Book> {
        let sql = format!(
            r#"
            INSERT INTO books (isdn, name, pages, category_id, author_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(book.isdn.as_str())
            .bind(&book.name)
            .bind(book.pages)
            .bind(book.category_id)
            .bind(book.author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to create book", e))?;

        Book::try_from(row)
    }

    async fn update(&self, isdn: &str, book: Book) -> RepositoryResult<Book> {
        let sql = format!(
            r#"
            UPDATE books
            SET isdn = $1, name = $2, pages = $3, category_id = $4, author_id = $5
            WHERE isdn = $6
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );
        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(book.isdn.as_str())
            .bind(&book.name)
            .bind(book.pages)
            .bind(book.category_id)
            .bind(book.author_id)
            .bind(isdn)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to update book", e))?
            .ok_or_else(|| RepositoryError::not_found("Book", isdn))?;

        Book::try_from(row)
    }

    async fn delete(&self, isdn: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE isdn = $1")
            .bind(isdn)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete book", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Book", isdn));
        }

        Ok(())
    }
}
