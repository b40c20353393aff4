use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::{verify_token, Claims};

/// Message returned when a non system user tries to mutate data
pub const FORBIDDEN_ROLE_MESSAGE: &str = "No tienes permisos para esta acción";

/// JWT authentication extractor for protected routes
///
/// Rejects with 401 when no token is present and 403 when the token does
/// not verify.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(
///     JwtAuth(claims): JwtAuth,
/// ) -> Result<String, ApiError> {
///     Ok(format!("Hello {}", claims.nombre))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JwtAuth(pub Claims);

/// Extractor that additionally requires the SystemUser role (403 otherwise)
#[derive(Debug, Clone)]
pub struct SystemUser(pub Claims);

/// Takes the token from the second word of the Authorization header
///
/// Any scheme is accepted, so `Bearer <token>` and `JWT <token>` both work.
pub fn extract_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}

#[async_trait]
impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_token)
            .ok_or_else(|| {
                tracing::debug!("Request without bearer token");
                ApiError::unauthorized("Token requerido")
            })?;

        let claims = verify_token(token, &state.auth.jwt_secret).map_err(|e| {
            tracing::debug!("Rejected token: {}", e);
            ApiError::forbidden("Token inválido")
        })?;

        Ok(JwtAuth(claims))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SystemUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let JwtAuth(claims) = JwtAuth::from_request_parts(parts, state).await?;

        if !claims.is_system_user() {
            tracing::debug!(
                "Role {} may not mutate data (rut {})",
                claims.user_type.description,
                claims.rut
            );
            return Err(ApiError::forbidden(FORBIDDEN_ROLE_MESSAGE));
        }

        Ok(SystemUser(claims))
    }
}
