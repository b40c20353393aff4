// Row shapes returned by the PostgreSQL queries

use crate::domain::author::Author;
use crate::domain::book::{Book, BookDetails, Isdn};
use crate::domain::category::Category;
use crate::domain::repositories::RepositoryError;

pub(crate) const BOOK_COLUMNS: &str = "isdn, name, pages, category_id, author_id";

pub(crate) const BOOK_DETAILS_SELECT: &str = r#"
    SELECT
        b.isdn, b.name, b.pages, b.category_id, b.author_id,
        a.name AS author_name, a.age AS author_age,
        c.description AS category_description
    FROM books b
    JOIN authors a ON a.id = b.author_id
    JOIN categories c ON c.id = b.category_id
"#;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BookRow {
    pub isdn: String,
    pub name: String,
    pub pages: i32,
    pub category_id: i32,
    pub author_id: i32,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let isdn = Isdn::new(row.isdn)
            .map_err(|e| RepositoryError::Database(format!("Invalid ISDN from database: {}", e)))?;

        Ok(Book {
            isdn,
            name: row.name,
            pages: row.pages,
            category_id: row.category_id,
            author_id: row.author_id,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BookDetailsRow {
    pub isdn: String,
    pub name: String,
    pub pages: i32,
    pub category_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub author_age: i32,
    pub category_description: String,
}

impl TryFrom<BookDetailsRow> for BookDetails {
    type Error = RepositoryError;

    fn try_from(row: BookDetailsRow) -> Result<Self, Self::Error> {
        let author = Author {
            id: row.author_id,
            name: row.author_name,
            age: row.author_age,
        };
        let category = Category {
            id: row.category_id,
            description: row.category_description,
        };
        let book = Book::try_from(BookRow {
            isdn: row.isdn,
            name: row.name,
            pages: row.pages,
            category_id: row.category_id,
            author_id: row.author_id,
        })?;

        Ok(BookDetails {
            book,
            author,
            category,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AuthorRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub description: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            description: row.description,
        }
    }
}

/// Converts a batch of book rows, failing on the first corrupt row
pub(crate) fn books_from_rows(rows: Vec<BookRow>) -> Result<Vec<Book>, RepositoryError> {
    rows.into_iter().map(Book::try_from).collect()
}
