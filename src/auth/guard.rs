use actix_web::HttpRequest;

use crate::auth::token;
use crate::error::AppError;

/// Gate that every protected operation passes through before touching
/// persisted state. Pulls the bearer token off the request and validates
/// it, returning the authenticated username.
pub fn assert_authorized(secret: &str, req: &HttpRequest) -> Result<String, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("No authorization token provided".to_string()))?;

    token::validate(secret, token)
}
