//! Site settings repository. The collection holds at most one document.

use super::{Collection, DocumentStore, Filter, RepositoryError, from_document, to_document};
use crate::models::settings::SiteSettings;

/// Repository for the singleton settings document.
pub struct SettingsRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    /// The stored settings, if they have been created.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails or the document is invalid.
    pub async fn get(&self) -> Result<Option<SiteSettings>, RepositoryError> {
        self.store
            .find_one(Collection::SiteSettings, &Filter::all())
            .await?
            .map(from_document)
            .transpose()
    }

    /// Insert the settings document.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        self.store
            .insert_one(Collection::SiteSettings, to_document(settings)?)
            .await
    }

    /// Replace the settings, creating the document if needed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the write fails.
    pub async fn replace(&self, settings: &SiteSettings) -> Result<(), RepositoryError> {
        self.store
            .upsert_one(
                Collection::SiteSettings,
                &Filter::all(),
                to_document(settings)?,
            )
            .await
    }
}
