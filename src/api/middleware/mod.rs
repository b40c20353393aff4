// Request guards: token and role extractors, body validation

pub mod auth;
pub mod validation;

pub use auth::{JwtAuth, SystemUser};
