use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::Value;
use std::env;

use crate::http_error::AppError;

// subject identifiers arrive as either a JSON number or a string
#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    id: Option<Value>,
}

/// Identity of the caller for the lifetime of one request. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

/// Verifies the raw `authorization` header value as a JWT and recovers the
/// subject identifier from its `id` claim.
///
/// The header value IS the token: no `Bearer ` prefix is stripped, matching
/// what the deployed clients send. Any decode failure (empty or malformed
/// value, bad signature, expired token) maps to the 500 authentication
/// failure; a token that decodes but carries no usable subject maps to 403.
pub fn authenticate(header_value: &str, secret: &str) -> Result<AuthUser, AppError> {
    let token_data = decode::<Claims>(
        header_value,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthFailure)?;

    let user_id = match token_data.claims.id {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return Err(AppError::NotLoggedIn),
    };

    Ok(AuthUser { user_id })
}

pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let auth_hdr = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    // the secret is read per request; a missing secret is indistinguishable
    // from a failed verification on the wire
    let secret = env::var("JWT_SECRET").map_err(|_| AppError::AuthFailure)?;
    let user = authenticate(&auth_hdr, &secret)?;
    // insert into extensions for handlers to use
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
