//! Account route handlers: signup, login, and the current user.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::extract::ApiJson;
use crate::middleware::RequireAuth;
use crate::models::user::User;
use crate::services::auth::{AuthService, AuthSession};
use crate::state::AppState;

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Create a customer account and return a session for it.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SignupRequest>,
) -> Result<Json<AuthSession>> {
    let auth = AuthService::new(state.store(), state.tokens());
    let session = auth.signup(&body.email, &body.password, &body.name).await?;
    Ok(Json(session))
}

/// Exchange email and password for a session.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<Json<AuthSession>> {
    let auth = AuthService::new(state.store(), state.tokens());
    let session = auth.login(&body.email, &body.password).await?;
    Ok(Json(session))
}

/// The authenticated user's record.
#[instrument(skip_all, fields(user_id = %identity.user_id))]
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<User>> {
    let auth = AuthService::new(state.store(), state.tokens());
    Ok(Json(auth.me(&identity).await?))
}
