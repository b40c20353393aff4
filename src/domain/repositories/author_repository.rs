use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::author::{Author, AuthorWithBooks, NewAuthor};

/// Repository trait for authors
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// List every author with their books
    async fn find_all(&self) -> RepositoryResult<Vec<AuthorWithBooks>>;

    /// Find an author (with books) by ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<AuthorWithBooks>>;

    /// Whether an author with this ID exists
    async fn exists(&self, id: i32) -> RepositoryResult<bool>;

    /// Insert a new author, returning it with its assigned ID
    async fn create(&self, author: NewAuthor) -> RepositoryResult<Author>;

    /// Replace an author's fields
    async fn update(&self, id: i32, author: NewAuthor) -> RepositoryResult<Author>;

    /// Delete an author. Fails with a conflict while books still reference it.
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
