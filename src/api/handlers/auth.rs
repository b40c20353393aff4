use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::mock_user::{mock_claims, Rut};

/// Request body for the mock login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// String or number; its parity picks the role
    #[serde(default)]
    pub rut: Option<Value>,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Mock login: issues a token for any valid RUT
///
/// There is no password check. Even RUTs get a SystemUser token, odd ones
/// a SystemClient token.
///
/// POST /usuarios/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let rut = payload
        .ok()
        .and_then(|Json(req)| req.rut)
        .and_then(|value| Rut::parse(&value))
        .ok_or_else(|| ApiError::bad_request("RUT inválido"))?;

    let claims = mock_claims(&rut, state.auth.token_ttl);
    let token = create_token(&claims, &state.auth.jwt_secret).map_err(|e| {
        tracing::error!("Failed to sign token: {}", e);
        ApiError::internal_server_error("Error generando el token")
    })?;

    tracing::info!("Issued {} token for rut {}", rut.role(), rut.as_str());

    Ok(Json(LoginResponse { token }))
}

/// Root endpoint
///
/// GET /
pub async fn service_status() -> &'static str {
    "Servicio funcionando correctamente"
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
