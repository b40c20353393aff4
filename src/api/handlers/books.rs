use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::{ApiError, NOT_FOUND_MESSAGE};
use crate::api::middleware::validation::{json_body, validate_book, BookPayload};
use crate::api::middleware::{JwtAuth, SystemUser};
use crate::api::state::AppState;
use crate::domain::book::{Book, BookDetails};

/// List every book with its author and category
///
/// GET /libros
pub async fn list_books(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<BookDetails>>, ApiError> {
    let books = state.books.find_all().await?;

    Ok(Json(books))
}

/// Get a book by ISDN
///
/// GET /libros/:isdn
pub async fn get_book(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Path(isdn): Path<String>,
) -> Result<Json<BookDetails>, ApiError> {
    let book = state
        .books
        .find_by_isdn(&isdn)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(book))
}

/// List the books of a category (empty when the category has none or does not exist)
///
/// GET /libros/categoria/:category_id
pub async fn get_books_by_category(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<BookDetails>>, ApiError> {
    let books = state.books.find_by_category(category_id).await?;

    Ok(Json(books))
}

/// Create a new book
///
/// POST /libros
pub async fn create_book(
    State(state): State<AppState>,
    SystemUser(claims): SystemUser,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let payload = json_body(payload)?;
    let book = validate_book(&state, &payload).await?;

    let book = state.books.create(book).await?;
    tracing::info!("Book {} created by rut {}", book.isdn, claims.rut);

    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace a book
///
/// PUT /libros/:isdn
pub async fn update_book(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(isdn): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let payload = json_body(payload)?;
    let book = validate_book(&state, &payload).await?;

    let book = state.books.update(&isdn, book).await?;

    Ok(Json(book))
}

/// Delete a book
///
/// DELETE /libros/:isdn
pub async fn delete_book(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(isdn): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.books.delete(&isdn).await?;

    Ok(StatusCode::NO_CONTENT)
}
