use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{hash_password, token};
use crate::db::Store;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received login request for user: {}", req.username);

    let user = state.store.find_user_by_username(&req.username).await?;

    // Unknown user and wrong password produce the same response so the
    // endpoint cannot be used to enumerate usernames.
    let user = match user {
        Some(user) if user.password_hash == hash_password(&req.password) => user,
        _ => {
            warn!("Login failed for user: {}", req.username);
            return Err(AppError::Unauthorized("Access Denied".to_string()));
        }
    };

    let auth = &state.settings.auth;
    let token = token::issue(&user.username, &auth.app_secret, auth.token_expiry_hours)?;

    info!("Login successful for user: {}", user.username);
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
