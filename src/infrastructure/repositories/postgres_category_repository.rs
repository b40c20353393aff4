use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_db_error;
use super::rows::{books_from_rows, BookRow, CategoryRow, BOOK_COLUMNS};
use crate::domain::book::Book;
use crate::domain::category::{Category, CategoryWithBooks, NewCategory};
use crate::domain::repositories::{CategoryRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<CategoryWithBooks>> {
        let categories =
            sqlx::query_as::<_, CategoryRow>("SELECT id, description FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to list categories", e))?;

        let sql = format!("SELECT {} FROM books ORDER BY isdn", BOOK_COLUMNS);
        let book_rows = sqlx::query_as::<_, BookRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list books", e))?;

        let mut by_category: HashMap<i32, Vec<Book>> = HashMap::new();
        for book in books_from_rows(book_rows)? {
            by_category.entry(book.category_id).or_default().push(book);
        }

        Ok(categories
            .into_iter()
            .map(|row| {
                let books = by_category.remove(&row.id).unwrap_or_default();
                CategoryWithBooks {
                    category: Category::from(row),
                    books,
                }
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithBooks>> {
        let Some(row) =
            sqlx::query_as::<_, CategoryRow>("SELECT id, description FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to find category by id", e))?
        else {
            return Ok(None);
        };

        let sql = format!(
            "SELECT {} FROM books WHERE category_id = $1 ORDER BY isdn",
            BOOK_COLUMNS
        );
        let book_rows = sqlx::query_as::<_, BookRow>(&sql)
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to load category books", e))?;

        Ok(Some(CategoryWithBooks {
            category: Category::from(row),
            books: books_from_rows(book_rows)?,
        }))
    }

    async fn exists(&self, id: i32) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to check category", e))
    }

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (description) VALUES ($1) RETURNING id, description",
        )
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to create category", e))?;

        Ok(Category::from(row))
    }

    async fn update(&self, id: i32, category: NewCategory) -> RepositoryResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET description = $1 WHERE id = $2 RETURNING id, description",
        )
        .bind(&category.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to update category", e))?
        .ok_or_else(|| RepositoryError::not_found("Category", id))?;

        Ok(Category::from(row))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete category", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Category", id));
        }

        Ok(())
    }
}
