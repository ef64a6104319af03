//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! emporium-cli admin create -e ops@example.com -n "Ops" -p 'long passphrase'
//! ```
//!
//! # Environment Variables
//!
//! - `EMPORIUM_DATABASE_URL` - `PostgreSQL` connection string
//! - `EMPORIUM_JWT_SECRET` - Token signing secret

use emporium_core::{Role, UserId};
use emporium_storefront::services::auth::{AuthError, AuthService};
use emporium_storefront::services::token::TokenService;
use thiserror::Error;

use super::{ConnectError, connect_store};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Connect(#[from] ConnectError),

    /// Account already exists.
    #[error("Account already exists with email: {0}")]
    UserExists(String),

    #[error("Could not create admin: {0}")]
    Auth(AuthError),
}

/// Create a new admin account.
///
/// # Returns
///
/// The ID of the created account.
///
/// # Errors
///
/// Returns `AdminError::UserExists` if the email is taken, or another
/// `AdminError` if configuration, validation, or the database fails.
pub async fn create_user(email: &str, name: &str, password: &str) -> Result<UserId, AdminError> {
    let (store, jwt_secret) = connect_store().await?;
    let tokens = TokenService::new(&jwt_secret);
    let auth = AuthService::new(&store, &tokens);

    tracing::info!("Creating admin account: {}", email);

    let user = auth
        .create_account(email, password, name, Role::Admin)
        .await
        .map_err(|e| match e {
            AuthError::DuplicateEmail => AdminError::UserExists(email.to_owned()),
            other => AdminError::Auth(other),
        })?;

    tracing::info!(
        "Admin account created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );

    Ok(user.id)
}
