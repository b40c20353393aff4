use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::{ApiError, NOT_FOUND_MESSAGE};
use crate::api::middleware::validation::{json_body, validate_category, CategoryPayload};
use crate::api::middleware::{JwtAuth, SystemUser};
use crate::api::state::AppState;
use crate::domain::category::{Category, CategoryWithBooks};

/// GET /categorias
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: JwtAuth,
) -> Result<Json<Vec<CategoryWithBooks>>, ApiError> {
    Ok(Json(state.categories.find_all().await?))
}

/// GET /categorias/:id
pub async fn get_category(
    State(state): State<AppState>,
    _auth: JwtAuth,
    Path(id): Path<i32>,
) -> Result<Json<CategoryWithBooks>, ApiError> {
    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND_MESSAGE))?;

    Ok(Json(category))
}

/// POST /categorias
pub async fn create_category(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = validate_category(&json_body(payload)?)?;

    let category = state.categories.create(category).await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categorias/:id
pub async fn update_category(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(id): Path<i32>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let category = validate_category(&json_body(payload)?)?;

    Ok(Json(state.categories.update(id, category).await?))
}

/// DELETE /categorias/:id
pub async fn delete_category(
    State(state): State<AppState>,
    SystemUser(_claims): SystemUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
