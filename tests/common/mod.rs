//! Shared helpers for the API integration tests
//!
//! Provides an in-memory implementation of the repository traits so the real
//! router can be exercised without a database.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use biblioteca_api::api::{router, AppState, AuthSettings};
use biblioteca_api::auth::jwt::{create_token, Claims};
use biblioteca_api::auth::role::Role;
use biblioteca_api::domain::author::{Author, AuthorWithBooks, NewAuthor};
use biblioteca_api::domain::book::{Book, BookDetails};
use biblioteca_api::domain::category::{Category, CategoryWithBooks, NewCategory};
use biblioteca_api::domain::repositories::{
    AuthorRepository, BookRepository, CategoryRepository, RepositoryError, RepositoryResult,
};
use chrono::Duration;
use serde_json::Value;
use tower::util::ServiceExt; // for oneshot

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Default)]
struct Store {
    authors: BTreeMap<i32, Author>,
    categories: BTreeMap<i32, Category>,
    books: BTreeMap<String, Book>,
    next_author_id: i32,
    next_category_id: i32,
}

impl Store {
    fn details(&self, book: &Book) -> RepositoryResult<BookDetails> {
        let author = self
            .authors
            .get(&book.author_id)
            .cloned()
            .ok_or_else(|| RepositoryError::Database("dangling author".to_string()))?;
        let category = self
            .categories
            .get(&book.category_id)
            .cloned()
            .ok_or_else(|| RepositoryError::Database("dangling category".to_string()))?;

        Ok(BookDetails {
            book: book.clone(),
            author,
            category,
        })
    }

    fn check_references(&self, book: &Book) -> RepositoryResult<()> {
        if !self.authors.contains_key(&book.author_id)
            || !self.categories.contains_key(&book.category_id)
        {
            return Err(RepositoryError::Conflict("foreign key violation".to_string()));
        }
        Ok(())
    }
}

/// In-memory library backing all three repository traits
#[derive(Clone, Default)]
pub struct InMemoryLibrary {
    store: Arc<Mutex<Store>>,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_author(&self, name: &str, age: i32) -> Author {
        let mut store = self.store.lock().unwrap();
        store.next_author_id += 1;
        let author = Author {
            id: store.next_author_id,
            name: name.to_string(),
            age,
        };
        store.authors.insert(author.id, author.clone());
        author
    }

    pub fn add_category(&self, description: &str) -> Category {
        let mut store = self.store.lock().unwrap();
        store.next_category_id += 1;
        let category = Category {
            id: store.next_category_id,
            description: description.to_string(),
        };
        store.categories.insert(category.id, category.clone());
        category
    }

    pub fn book_count(&self) -> usize {
        self.store.lock().unwrap().books.len()
    }

    pub fn state(&self) -> AppState {
        AppState {
            books: Arc::new(self.clone()),
            authors: Arc::new(self.clone()),
            categories: Arc::new(self.clone()),
            auth: AuthSettings::new(TEST_SECRET, Duration::hours(10)),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryLibrary {
    async fn find_all(&self) -> RepositoryResult<Vec<BookDetails>> {
        let store = self.store.lock().unwrap();
        store.books.values().map(|b| store.details(b)).collect()
    }

    async fn find_by_isdn(&self, isdn: &str) -> RepositoryResult<Option<BookDetails>> {
        let store = self.store.lock().unwrap();
        store.books.get(isdn).map(|b| store.details(b)).transpose()
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<BookDetails>> {
        let store = self.store.lock().unwrap();
        store
            .books
            .values()
            .filter(|b| b.category_id == category_id)
            .map(|b| store.details(b))
            .collect()
    }

    async fn create(&self, book: Book) -> RepositoryResult<Book> {
        let mut store = self.store.lock().unwrap();
        if store.books.contains_key(book.isdn.as_str()) {
            return Err(RepositoryError::Conflict(
                "Failed to create book: duplicate key".to_string(),
            ));
        }
        store.check_references(&book)?;
        store.books.insert(book.isdn.to_string(), book.clone());
        Ok(book)
    }

    async fn update(&self, isdn: &str, book: Book) -> RepositoryResult<Book> {
        let mut store = self.store.lock().unwrap();
        if !store.books.contains_key(isdn) {
            return Err(RepositoryError::not_found("Book", isdn));
        }
        if book.isdn.as_str() != isdn && store.books.contains_key(book.isdn.as_str()) {
            return Err(RepositoryError::Conflict(
                "Failed to update book: duplicate key".to_string(),
            ));
        }
        store.check_references(&book)?;
        store.books.remove(isdn);
        store.books.insert(book.isdn.to_string(), book.clone());
        Ok(book)
    }

    async fn delete(&self, isdn: &str) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        store
            .books
            .remove(isdn)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Book", isdn))
    }
}

#[async_trait]
impl AuthorRepository for InMemoryLibrary {
    async fn find_all(&self) -> RepositoryResult<Vec<AuthorWithBooks>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .authors
            .values()
            .map(|a| AuthorWithBooks {
                author: a.clone(),
                books: store
                    .books
                    .values()
                    .filter(|b| b.author_id == a.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<AuthorWithBooks>> {
        let store = self.store.lock().unwrap();
        Ok(store.authors.get(&id).map(|a| AuthorWithBooks {
            author: a.clone(),
            books: store
                .books
                .values()
                .filter(|b| b.author_id == id)
                .cloned()
                .collect(),
        }))
    }

    async fn exists(&self, id: i32) -> RepositoryResult<bool> {
        Ok(self.store.lock().unwrap().authors.contains_key(&id))
    }

    async fn create(&self, author: NewAuthor) -> RepositoryResult<Author> {
        Ok(self.add_author(&author.name, author.age))
    }

    async fn update(&self, id: i32, author: NewAuthor) -> RepositoryResult<Author> {
        let mut store = self.store.lock().unwrap();
        let existing = store
            .authors
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("Author", id))?;
        existing.name = author.name;
        existing.age = author.age;
        Ok(existing.clone())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        if !store.authors.contains_key(&id) {
            return Err(RepositoryError::not_found("Author", id));
        }
        if store.books.values().any(|b| b.author_id == id) {
            return Err(RepositoryError::Conflict(
                "Failed to delete author: row is referenced by or references another record"
                    .to_string(),
            ));
        }
        store.authors.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryLibrary {
    async fn find_all(&self) -> RepositoryResult<Vec<CategoryWithBooks>> {
        let store = self.store.lock().unwrap();
        Ok(store
            .categories
            .values()
            .map(|c| CategoryWithBooks {
                category: c.clone(),
                books: store
                    .books
                    .values()
                    .filter(|b| b.category_id == c.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithBooks>> {
        let store = self.store.lock().unwrap();
        Ok(store.categories.get(&id).map(|c| CategoryWithBooks {
            category: c.clone(),
            books: store
                .books
                .values()
                .filter(|b| b.category_id == id)
                .cloned()
                .collect(),
        }))
    }

    async fn exists(&self, id: i32) -> RepositoryResult<bool> {
        Ok(self.store.lock().unwrap().categories.contains_key(&id))
    }

    async fn create(&self, category: NewCategory) -> RepositoryResult<Category> {
        Ok(self.add_category(&category.description))
    }

    async fn update(&self, id: i32, category: NewCategory) -> RepositoryResult<Category> {
        let mut store = self.store.lock().unwrap();
        let existing = store
            .categories
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("Category", id))?;
        existing.description = category.description;
        Ok(existing.clone())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.store.lock().unwrap();
        if !store.categories.contains_key(&id) {
            return Err(RepositoryError::not_found("Category", id));
        }
        if store.books.values().any(|b| b.category_id == id) {
            return Err(RepositoryError::Conflict(
                "Failed to delete category: row is referenced by or references another record"
                    .to_string(),
            ));
        }
        store.categories.remove(&id);
        Ok(())
    }
}

/// Router backed by a fresh in-memory library
pub fn setup_app() -> (Router, InMemoryLibrary) {
    let library = InMemoryLibrary::new();
    (router(library.state()), library)
}

/// Token signed with the test secret for the given role
pub fn token_for(role: Role) -> String {
    let rut = match role {
        Role::SystemUser => "12345678",
        Role::SystemClient => "12345679",
    };
    let claims = Claims::new(rut, "Mario", "Cares", role, Duration::hours(1));
    create_token(&claims, TEST_SECRET).expect("valid token")
}

/// Sends a request through the router and returns the status and JSON body
///
/// Empty bodies come back as `Value::Null`, non-JSON bodies as a string.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}
