use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::{ApiError, NOT_FOUND_MESSAGE};
use crate::api::middleware::validation::{json_body, validate_author, AuthorPayload};
use crate::api::middleware::{JwtAuth, SystemUser};
use crate::api::state::AppState;
use crate::domain::author::{Author, AuthorWithBooks};

/// List every author with their books
///
/// GET /autores
pub async fn list_authors(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<AuthorWithBooks>>, ApiError> {
    Ok(Json(state.authors.find_all().await?))
}

/// Get an author by ID
///
/// GET /autores/:id
pub async fn get_author(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Path(id): Path<i32>,
) -> Result<Json<AuthorWithBooks>, ApiError> {
    let author = state
        .authors
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(author))
}

/// Create a new author
///
/// POST /autores
pub async fn create_author(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    payload: Result<Json<AuthorPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    let author = validate_author(&json_body(payload)?)?;

    let author = state.authors.create(author).await?;

    Ok((StatusCode::CREATED, Json(author)))
}

/// Replace an author's name and age
///
/// PUT /autores/:id
pub async fn update_author(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(id): Path<i32>,
    payload: Result<Json<AuthorPayload>, JsonRejection>,
) -> Result<Json<Author>, ApiError> {
    let author = validate_author(&json_body(payload)?)?;

    Ok(Json(state.authors.update(id, author).await?))
}

/// Delete an author
///
/// DELETE /autores/:id
pub async fn delete_author(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.authors.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
