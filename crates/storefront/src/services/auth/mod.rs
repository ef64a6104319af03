//! Authentication service.
//!
//! Password accounts with Argon2id hashes and JWT session tokens.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Serialize;

use emporium_core::{Email, Role};

use crate::db::DocumentStore;
use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::user::{User, UserRecord};
use crate::services::token::{Identity, TokenService};

/// A freshly issued session: the token and the public user record.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Authentication service.
///
/// Handles account creation, login, and identity lookups.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore, tokens: &'a TokenService) -> Self {
        Self {
            users: UserRepository::new(store),
            tokens,
        }
    }

    /// Register a new customer account and open a session for it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is empty.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, AuthError> {
        let user = self.create_account(email, password, name, Role::User).await?;
        self.open_session(user)
    }

    /// Login with email and password.
    ///
    /// Unknown emails and wrong passwords fail identically.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(record) = self.users.get_by_email(&email).await? else {
            // Pay the Argon2 cost of a real account.
            let _ = verify_password(password, UNKNOWN_ACCOUNT_HASH);
            return Err(AuthError::InvalidCredentials);
        };

        verify_password(password, &record.password_hash)?;

        self.open_session(record.user)
    }

    /// The account behind an authenticated identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the account no longer exists.
    pub async fn me(&self, identity: &Identity) -> Result<User, AuthError> {
        self.users
            .get_by_id(&identity.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// All accounts, without password hashes.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the query fails.
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list().await?)
    }

    /// Whether an account with this email exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    pub async fn account_exists(&self, email: &str) -> Result<bool, AuthError> {
        let email = Email::parse(email)?;
        Ok(self.users.exists(&email).await?)
    }

    /// Create an account with the given role.
    ///
    /// Used by signup (customers) and by the seed loader and CLI (admins).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is empty.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        if self.users.exists(&email).await? {
            return Err(AuthError::DuplicateEmail);
        }

        let record = UserRecord {
            user: User::new(email, name, role),
            password_hash: hash_password(password)?,
        };

        // The unique index catches a concurrent signup that passed the check.
        self.users.create(&record).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::DuplicateEmail,
            other => AuthError::Repository(other),
        })?;

        tracing::info!(user_id = %record.user.id, role = %role, "Account created");
        Ok(record.user)
    }

    fn open_session(&self, user: User) -> Result<AuthSession, AuthError> {
        let identity = Identity {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
        };
        let token = self.tokens.issue(&identity)?;
        Ok(AuthSession { token, user })
    }
}

// =============================================================================
// Password Helpers
// =============================================================================

/// Reject passwords that cannot be used.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::WeakPassword(
            "Password cannot be empty".to_owned(),
        ));
    }
    Ok(())
}

/// Verified against when the email has no account. Uses the default Argon2
/// parameters; no password matches it.
const UNKNOWN_ACCOUNT_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$PfdbqLZYEa4Yf41HS7OVSg$3eVTx+9zCG/qlJP0loD4KHJ0zE0IPpkerq3ZlMI52wk";

/// Hash a password with Argon2id and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
