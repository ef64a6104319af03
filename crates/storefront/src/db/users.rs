//! User repository.
//!
//! Users live in the `users` collection with their password hash; reads that
//! leave this module as [`User`] never carry the hash.

use emporium_core::{Email, UserId};

use super::{
    Collection, DocumentStore, Filter, FindOptions, RepositoryError, from_document,
    from_documents, to_document,
};
use crate::models::user::{User, UserRecord};

/// Maximum number of users returned by a listing.
pub const LIST_LIMIT: usize = 1000;

/// Repository for user documents.
pub struct UserRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// Get a user and password hash by email (exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored user is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<UserRecord>, RepositoryError> {
        let filter = Filter::all().eq("email", email.as_str());
        self.store
            .find_one(Collection::Users, &filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored user is invalid.
    pub async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let filter = Filter::all().eq("id", id.as_str());
        self.store
            .find_one(Collection::Users, &filter)
            .await?
            .map(from_document)
            .transpose()
    }

    /// Whether an account with this email exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, email: &Email) -> Result<bool, RepositoryError> {
        let filter = Filter::all().eq("email", email.as_str());
        Ok(self.store.count(Collection::Users, &filter).await? > 0)
    }

    /// Store a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, record: &UserRecord) -> Result<(), RepositoryError> {
        self.store
            .insert_one(Collection::Users, to_document(record)?)
            .await
    }

    /// List users in store order, without password hashes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored user is invalid.
    pub async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let documents = self
            .store
            .find(Collection::Users, &Filter::all(), FindOptions::limit(LIST_LIMIT))
            .await?;
        from_documents(documents)
    }
}
