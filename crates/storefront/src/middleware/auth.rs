//! Access guard extractors.
//!
//! Protected handlers take [`RequireAuth`] or [`RequireAdmin`] as an argument.
//! Both read `Authorization: Bearer <token>` and verify it with the state's
//! [`TokenService`](crate::services::token::TokenService); rejections are
//! [`AppError`]s so they render as the usual JSON error body.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn protected_handler(RequireAuth(identity): RequireAuth) -> String {
//!     format!("Hello, {}!", identity.email)
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::{AppError, set_sentry_user};
use crate::services::token::Identity;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
pub struct RequireAuth(pub Identity);

/// Extractor that requires a valid bearer token for an admin account.
pub struct RequireAdmin(pub Identity);

/// Pull the token out of an `Authorization` header value.
///
/// The scheme is matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Resolve the request's bearer token into an identity.
///
/// # Errors
///
/// Returns `AppError::MissingToken` without a usable `Authorization` header,
/// or `AppError::Token` if verification fails.
pub fn authenticate(parts: &Parts, state: &AppState) -> Result<Identity, AppError> {
    let token = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .ok_or(AppError::MissingToken)?;

    let identity = state.tokens().verify(token)?;
    set_sentry_user(&identity.user_id, Some(identity.email.as_str()));
    Ok(identity)
}

/// Admit only admin identities.
///
/// # Errors
///
/// Returns `AppError::Forbidden` unless the identity has the admin role.
pub fn require_admin(identity: Identity) -> Result<Identity, AppError> {
    if identity.is_admin() {
        Ok(identity)
    } else {
        tracing::warn!(user_id = %identity.user_id, "Admin access denied");
        Err(AppError::Forbidden("Admin access required".to_owned()))
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(Self)
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).and_then(require_admin).map(Self)
    }
}
