use serde::{Deserialize, Serialize};

use crate::domain::book::Book;

/// A category row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub description: String,
}

/// Fields needed to create or replace a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub description: String,
}

/// A category with the books filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryWithBooks {
    #[serde(flatten)]
    pub category: Category,
    pub books: Vec<Book>,
}
