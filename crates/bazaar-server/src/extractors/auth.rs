//! Basic auth extractor for the protected catalog routes

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::ApiError;
use crate::AppState;

/// Principal extracted from an `Authorization: Basic` header.
///
/// Credentials are re-validated on every request; there is no session or
/// token state.
#[derive(Clone, Debug)]
pub struct BasicAuth {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for BasicAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let (username, password) = parse_basic(auth_header)
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

        if !state.credentials.verify(&username, &password).await {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(BasicAuth { username })
    }
}

/// Decode `Basic <base64(username:password)>` into its parts.
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
