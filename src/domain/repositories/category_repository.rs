use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::category::{Category, CategoryWithBooks, NewCategory};

/// Repository trait for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<CategoryWithBooks>>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithBooks>>;

    async fn exists(&self, id: i32) -> RepositoryResult<bool>;

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category>;

    async fn update(&self, id: i32, category: NewCategory) -> RepositoryResult<Category>;

    /// Delete a category. Fails with a conflict while books still reference it.
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
