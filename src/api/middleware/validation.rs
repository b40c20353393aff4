// Request body validation for the mutating endpoints
//
// Field checks run in a fixed order and stop at the first failure; the
// foreign-key lookups run last.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::author::{NewAuthor, MAX_AGE, MIN_AGE};
use crate::domain::book::{Book, Isdn, MAX_PAGES, MIN_PAGES};
use crate::domain::category::NewCategory;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;

pub const MSG_REQUIRED: &str = "Todos los campos son requeridos";
pub const MSG_ISDN_LENGTH: &str = "ISDN debe tener 8 caracteres";
pub const MSG_NAME_LENGTH: &str = "Nombre debe tener entre 3 y 100 caracteres";
pub const MSG_PAGES_RANGE: &str = "Páginas debe estar entre 100 y 1000";
pub const MSG_INVALID_CATEGORY: &str = "Categoría inválida";
pub const MSG_INVALID_AUTHOR: &str = "Autor inválido";
pub const MSG_AGE_RANGE: &str = "Edad debe estar entre 1 y 120";
pub const MSG_DESCRIPTION_LENGTH: &str = "Descripción debe tener entre 3 y 100 caracteres";

/// Book body as sent by the client; every field may be absent
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub isdn: Option<String>,
    pub name: Option<String>,
    pub pages: Option<i32>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
}

/// Author body as sent by the client
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AuthorPayload {
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Category body as sent by the client
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CategoryPayload {
    pub description: Option<String>,
}

/// Unwraps a JSON body, turning malformed input into a 400
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

// Empty strings and zeros count as missing
fn present_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn present_int(value: Option<i32>) -> Option<i32> {
    value.filter(|n| *n != 0)
}

fn length_between(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// Static checks on a book body: presence, ISDN length, name length, page range
pub fn check_book_fields(payload: &BookPayload) -> Result<Book, ApiError> {
    let (Some(isdn), Some(name), Some(pages), Some(category_id), Some(author_id)) = (
        present_str(&payload.isdn),
        present_str(&payload.name),
        present_int(payload.pages),
        present_int(payload.category_id),
        present_int(payload.author_id),
    ) else {
        return Err(ApiError::bad_request(MSG_REQUIRED));
    };

    let isdn = Isdn::new(isdn).map_err(|_| ApiError::bad_request(MSG_ISDN_LENGTH))?;

    if !length_between(name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(ApiError::bad_request(MSG_NAME_LENGTH));
    }

    if !(MIN_PAGES..=MAX_PAGES).contains(&pages) {
        return Err(ApiError::bad_request(MSG_PAGES_RANGE));
    }

    Ok(Book {
        isdn,
        name: name.to_string(),
        pages,
        category_id,
        author_id,
    })
}

/// Full book validation, including that the category and author exist
pub async fn validate_book(state: &AppState, payload: &BookPayload) -> Result<Book, ApiError> {
    let book = check_book_fields(payload)?;

    if !state.categories.exists(book.category_id).await? {
        return Err(ApiError::bad_request(MSG_INVALID_CATEGORY));
    }

    if !state.authors.exists(book.author_id).await? {
        return Err(ApiError::bad_request(MSG_INVALID_AUTHOR));
    }

    Ok(book)
}

/// Checks an author body: name and age present, name 3-100 chars, age 1-120
pub fn validate_author(payload: &AuthorPayload) -> Result<NewAuthor, ApiError> {
    let (Some(name), Some(age)) = (present_str(&payload.name), present_int(payload.age)) else {
        return Err(ApiError::bad_request(MSG_REQUIRED));
    };

    if !length_between(name, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(ApiError::bad_request(MSG_NAME_LENGTH));
    }

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ApiError::bad_request(MSG_AGE_RANGE));
    }

    Ok(NewAuthor {
        name: name.to_string(),
        age,
    })
}

/// Checks a category body: description present and 3-100 chars
pub fn validate_category(payload: &CategoryPayload) -> Result<NewCategory, ApiError> {
    let Some(description) = present_str(&payload.description) else {
        return Err(ApiError::bad_request(MSG_REQUIRED));
    };

    if !length_between(description, MIN_NAME_LENGTH, MAX_NAME_LENGTH) {
        return Err(ApiError::bad_request(MSG_DESCRIPTION_LENGTH));
    }

    Ok(NewCategory {
        description: description.to_string(),
    })
}
