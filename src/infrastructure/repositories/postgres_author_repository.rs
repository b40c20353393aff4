use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use super::rows::{books_from_rows, AuthorRow, BookRow, BOOK_COLUMNS};
use crate::domain::author::{Author, AuthorWithBooks, NewAuthor};
use crate::domain::book::Book;
use crate::domain::repositories::{AuthorRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of AuthorRepository
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    /// Creates a new PostgresAuthorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn books_of(&self, author_id: i32) -> RepositoryResult<Vec<Book>> {
        let sql = format!(
            "SELECT {} FROM books WHERE author_id = $1 ORDER BY isdn",
            BOOK_COLUMNS
        );
        let rows = sqlx::query_as::<_, BookRow>(&sql)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to load author books", e))?;

        books_from_rows(rows)
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<AuthorWithBooks>> {
        let authors =
            sqlx::query_as::<_, AuthorRow>("SELECT id, name, age FROM authors ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to list authors", e))?;

        let sql = format!("SELECT {} FROM books ORDER BY isdn", BOOK_COLUMNS);
        let book_rows = sqlx::query_as::<_, BookRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list books", e))?;

        let mut by_author: HashMap<i32, Vec<Book>> = HashMap::new();
        for book in books_from_rows(book_rows)? {
            by_author.entry(book.author_id).or_default().push(book);
        }

        Ok(authors
            .into_iter()
            .map(|row| {
                let books = by_author.remove(&row.id).unwrap_or_default();
                AuthorWithBooks {
                    author: Author::from(row),
                    books,
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<AuthorWithBooks>> {
        let row = sqlx::query_as::<_, AuthorRow>("SELECT id, name, age FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find author by id", e))?;

        match row {
            Some(row) => {
                let books = self.books_of(row.id).await?;
                Ok(Some(AuthorWithBooks {
                    author: Author::from(row),
                    books,
                }))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: i32) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to check author", e))
    }

    async fn create(&self, author: NewAuthor) -> RepositoryResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (name, age) VALUES ($1, $2) RETURNING id, name, age",
        )
        .bind(&author.name)
        .bind(author.age)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to create author", e))?;

        Ok(Author::from(row))
    }

    async fn update(&self, id: i32, author: NewAuthor) -> RepositoryResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "UPDATE authors SET name = $1, age = $2 WHERE id = $3 RETURNING id, name, age",
        )
        .bind(&author.name)
        .bind(author.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to update author", e))?
        .ok_or_else(|| RepositoryError::not_found("Author", id))?;

        Ok(Author::from(row))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete author", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Author", id));
        }

        Ok(())
    }
}
