use serde::{Deserialize, Serialize};

use super::value_objects::Isdn;
use crate::domain::author::Author;
use crate::domain::category::Category;

/// Minimum number of pages a book may have
pub const MIN_PAGES: i32 = 100;
/// Maximum number of pages a book may have
pub const MAX_PAGES: i32 = 1000;

/// A book row
///
/// The ISDN is the primary key. `category_id` and `author_id` must
/// reference existing rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub isdn: Isdn,
    pub name: String,
    pub pages: i32,
    pub category_id: i32,
    pub author_id: i32,
}

/// A book together with the author and category it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetails {
    #[serde(flatten)]
    pub book: Book,
    pub author: Author,
    pub category: Category,
}
