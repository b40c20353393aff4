use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::book::{Book, BookDetails};

/// Repository trait for books
///
/// Read operations return the book joined with its author and category.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// List every book
    async fn find_all(&self) -> RepositoryResult<Vec<BookDetails>>;

    /// Find a book by its ISDN
    async fn find_by_isdn(&self, isdn: &str) -> RepositoryResult<Option<BookDetails>>;

    /// List the books filed under a category
    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<BookDetails>>;

    /// Insert a new book
    async fn create(&self, book: Book) -> RepositoryResult<Book>;

    /// Replace the book stored under `isdn`. The new record may carry a different ISDN.
    async fn update(&self, isdn: &str, book: Book) -> RepositoryResult<Book>;

    /// Delete a book by ISDN
    async fn delete(&self, isdn: &str) -> RepositoryResult<()>;
}
