// Repository contracts (ports)
// Implementations live in the infrastructure layer

pub mod author_repository;
pub mod book_repository;
pub mod category_repository;
pub mod errors;

pub use author_repository::AuthorRepository;
pub use book_repository::BookRepository;
pub use category_repository::CategoryRepository;
pub use errors::{RepositoryError, RepositoryResult};
