use serde::{Deserialize, Serialize};

use crate::domain::book::Book;

/// Youngest accepted author age
pub const MIN_AGE: i32 = 1;
/// Oldest accepted author age
pub const MAX_AGE: i32 = 120;

/// An author row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Fields needed to create or replace an author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub age: i32,
}

/// An author with every book they wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorWithBooks {
    #[serde(flatten)]
    pub author: Author,
    pub books: Vec<Book>,
}
