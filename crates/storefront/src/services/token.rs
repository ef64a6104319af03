//! Session tokens.
//!
//! Tokens are HS256 JWTs signed with the configured secret. They carry the
//! user's ID, email, and role and expire seven days after issue. There is
//! no revocation; a token stays valid until it expires.

use core::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use emporium_core::{Email, Role, UserId};

/// How long an issued token stays valid.
pub const TOKEN_TTL: Duration = Duration::days(7);

/// Errors from issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token was valid but its expiry has passed.
    #[error("token expired")]
    Expired,

    /// Bad signature, wrong algorithm, or malformed token.
    #[error("invalid token")]
    Invalid,

    /// Signing failed.
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// The authenticated caller, as recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub email: Email,
    pub role: Role,
}

impl Identity {
    /// Whether this identity may use admin operations.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user_id: UserId,
    email: Email,
    role: Role,
    exp: i64,
    iat: i64,
    /// Unique per token, so two tokens issued in the same second differ.
    jti: String,
}

/// Issues and verifies session tokens with a single shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a token for `identity`, valid for [`TOKEN_TTL`].
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if the token cannot be signed.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if the token cannot be signed.
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            role: identity.role,
            exp: (now + TOKEN_TTL).timestamp(),
            iat: now.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and recover its identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Expired` if the token has expired, or
    /// `TokenError::Invalid` if it is malformed or its signature does not verify.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// See [`TokenService::verify`].
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(Identity {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl", &TOKEN_TTL)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_owned()))
    }

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: UserId::new("user-1"),
            email: Email::parse("a@x.com").unwrap(),
            role,
        }
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let tokens = service("Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%");
        let token = tokens.issue(&identity(Role::Admin)).unwrap();
        let verified = tokens.verify(&token).unwrap();
        assert_eq!(verified, identity(Role::Admin));
        assert!(verified.is_admin());
    }

    #[test]
    fn test_valid_until_expiry() {
        let tokens = service("Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%");
        let issued = Utc::now();
        let token = tokens.issue_at(&identity(Role::User), issued).unwrap();

        let almost = issued + TOKEN_TTL - Duration::seconds(1);
        assert!(tokens.verify_at(&token, almost).is_ok());

        let after = issued + TOKEN_TTL + Duration::seconds(1);
        assert!(matches!(
            tokens.verify_at(&token, after),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let issuer = service("Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%");
        let other = service("Qw7!eR4@tY1#uI8$oP5%aS2^dF9&gH6*");
        let token = issuer.issue(&identity(Role::User)).unwrap();
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tampered_and_garbage_tokens_are_invalid() {
        let tokens = service("Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%");
        let user_token = tokens.issue(&identity(Role::User)).unwrap();
        let admin_token = tokens.issue(&identity(Role::Admin)).unwrap();

        // Admin claims with the user token's signature.
        let user_parts: Vec<&str> = user_token.split('.').collect();
        let admin_parts: Vec<&str> = admin_token.split('.').collect();
        let forged = format!("{}.{}.{}", user_parts[0], admin_parts[1], user_parts[2]);
        assert!(matches!(tokens.verify(&forged), Err(TokenError::Invalid)));

        assert!(matches!(tokens.verify("not-a-token"), Err(TokenError::Invalid)));
        assert!(matches!(tokens.verify(""), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let tokens = service("Xk9#mP2$vL5@nQ8&wR3*tY6!zB1^cF4%");
        let now = Utc::now();
        let a = tokens.issue_at(&identity(Role::User), now).unwrap();
        let b = tokens.issue_at(&identity(Role::User), now).unwrap();
        assert_ne!(a, b);
        assert_eq!(tokens.verify(&a).unwrap(), tokens.verify(&b).unwrap());
    }
}
