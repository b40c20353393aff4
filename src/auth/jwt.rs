// JWT token creation and verification
// Tokens carry the mock user profile, signed with HS256

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::role::{Role, UserType, SYSTEM_USER};

/// JWT claims structure
///
/// Field names follow the JSON the login endpoint has always issued,
/// hence the Spanish `nombre`/`apellido` and the `userTypeId` object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// RUT the token was issued for
    pub rut: String,
    pub nombre: String,
    pub apellido: String,
    /// Role of the holder
    #[serde(rename = "userTypeId")]
    pub user_type: UserType,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// Builds claims for a user, valid for `ttl` starting now
    pub fn new(
        rut: impl Into<String>,
        nombre: impl Into<String>,
        apellido: impl Into<String>,
        role: Role,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            rut: rut.into(),
            nombre: nombre.into(),
            apellido: apellido.into(),
            user_type: UserType::from(role),
            iat: now.timestamp() as usize,
            exp: (now + ttl).timestamp() as usize,
        }
    }

    /// Whether the holder may mutate data
    pub fn is_system_user(&self) -> bool {
        self.user_type.description == SYSTEM_USER
    }
}

/// Signs claims into a JWT token
///
/// # Example
/// ```
/// use biblioteca_api::auth::jwt::{create_token, Claims};
/// use biblioteca_api::auth::role::Role;
/// use chrono::Duration;
///
/// let claims = Claims::new("12345678", "Mario", "Cares", Role::SystemUser, Duration::hours(10));
/// let token = create_token(&claims, "your-secret-key").expect("valid token");
/// assert!(!token.is_empty());
/// ```
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a JWT token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if the signature and expiry check out
/// * `Err(String)` - If the token is malformed, tampered with or expired
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
