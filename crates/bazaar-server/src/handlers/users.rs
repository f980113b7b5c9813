//! User record handlers (relational store)

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher};
use axum::{
    extract::{Path, State},
    Json,
};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    id: i64,
    username: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    user: UserInfo,
}

pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddUserRequest>,
) -> Result<Json<Value>> {
    let username = req.username.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    // Passwords are hashed at rest; plaintext is never stored.
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::PasswordHash(e.to_string()))?
        .to_string();

    state.users.create_user(&username, &password_hash).await?;

    info!("User added: {}", username);
    Ok(Json(json!({ "message": "User added successfully" })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>> {
    if !state.users.delete_user(&username).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    info!("User deleted: {}", username);
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>> {
    let user = state
        .users
        .get_user(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    // The stored hash stays private; responses carry id and username only.
    Ok(Json(UserResponse {
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    }))
}
