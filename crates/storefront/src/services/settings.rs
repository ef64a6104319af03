//! Settings service for the singleton site configuration.

use super::ServiceError;
use crate::db::DocumentStore;
use crate::db::settings::SettingsRepository;
use crate::models::settings::SiteSettings;

/// Site settings operations.
pub struct SettingsService<'a> {
    settings: SettingsRepository<'a>,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service.
    #[must_use]
    pub const fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            settings: SettingsRepository::new(store),
        }
    }

    /// The current settings, created with defaults on first read.
    ///
    /// Two concurrent first reads may both insert defaults; either copy is
    /// equivalent.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn get(&self) -> Result<SiteSettings, ServiceError> {
        if let Some(settings) = self.settings.get().await? {
            return Ok(settings);
        }

        let defaults = SiteSettings::default();
        self.settings.create(&defaults).await?;
        tracing::info!("Site settings initialized with defaults");
        Ok(defaults)
    }

    /// Replace the settings.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Repository` if the store fails.
    pub async fn update(&self, settings: SiteSettings) -> Result<SiteSettings, ServiceError> {
        self.settings.replace(&settings).await?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::{Collection, Filter, MemoryDocumentStore};

    #[tokio::test]
    async fn test_first_read_persists_defaults() {
        let store = MemoryDocumentStore::new();
        let service = SettingsService::new(&store);

        assert_eq!(service.get().await.unwrap(), SiteSettings::default());
        assert_eq!(service.get().await.unwrap(), SiteSettings::default());
        assert_eq!(
            store
                .count(Collection::SiteSettings, &Filter::all())
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_update_replaces_maps() {
        let store = MemoryDocumentStore::new();
        let service = SettingsService::new(&store);
        service.get().await.unwrap();

        let mut settings = SiteSettings::default();
        settings.payment_methods.clear();
        settings
            .payment_methods
            .insert("card".to_owned(), false.into());
        service.update(settings.clone()).await.unwrap();

        let stored = service.get().await.unwrap();
        assert_eq!(stored, settings);
        assert_eq!(stored.payment_methods.len(), 1);
    }
}
