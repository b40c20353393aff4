use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::domain::repositories::{AuthorRepository, BookRepository, CategoryRepository};
use crate::infrastructure::repositories::{
    PostgresAuthorRepository, PostgresBookRepository, PostgresCategoryRepository,
};

/// Token signing settings shared by the login handler and the auth extractors
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: Arc<str>,
    pub token_ttl: Duration,
}

impl AuthSettings {
    pub fn new(jwt_secret: impl Into<Arc<str>>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }
}

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub auth: AuthSettings,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            books: Arc::new(PostgresBookRepository::new(pool.clone())),
            authors: Arc::new(PostgresAuthorRepository::new(pool.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(pool)),
            auth: AuthSettings::new(config.jwt_secret.as_str(), config.token_ttl()),
        }
    }
}
