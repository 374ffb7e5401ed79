use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    // The identity service hands out tokens to non-admins too; only tokens
    // carrying the admin claim may reach the entity routes.
    #[serde(default)]
    pub admin: bool,
    pub exp: usize,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = headers
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AppError::MissingToken)?;

    let claims = verify_token(token, &state.config.jwt_secret)?;

    if !claims.admin {
        return Err(AppError::Forbidden);
    }

    // Make the decoded identity available to handlers
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_ref());

    decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::HS256))
        .map(|data| data.claims)
        .map_err(|_| AppError::InvalidToken)
}
