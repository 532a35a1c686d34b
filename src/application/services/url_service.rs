//! Alias creation, resolution and ranking service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{NewUrlRecord, RankedUrls, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;

/// Service for the alias lifecycle on top of a [`UrlRepository`].
///
/// The repository and generator are injected at construction; the service
/// holds no other state. Inputs are expected to come from the validated
/// commands in [`crate::application::commands`].
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
    alias_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        alias_length: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            alias_length,
        }
    }

    /// Stores `original_url` under `alias`, or under a generated alias when
    /// none is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is taken, including when a
    /// generated alias collides; the call is not retried.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn create_alias(
        &self,
        alias: Option<String>,
        original_url: String,
    ) -> Result<UrlRecord, AppError> {
        let alias = alias.unwrap_or_else(|| self.generator.generate(self.alias_length));

        match self
            .repository
            .create(NewUrlRecord::new(alias, original_url))
            .await
        {
            Ok(record) => {
                info!(alias = %record.alias, "Alias created");
                Ok(record)
            }
            Err(RepositoryError::Conflict(alias)) => {
                warn!(alias = %alias, "Alias already exists");
                Err(RepositoryError::Conflict(alias).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up the record behind an alias without counting the access.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias has no record.
    /// Returns [`AppError::Internal`] on storage faults.
    pub async fn resolve_alias(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(alias.to_string()).into())
    }

    /// Returns the `limit` most accessed records.
    pub async fn list_top(&self, limit: u32) -> Result<RankedUrls, AppError> {
        Ok(self.repository.list_top_by_access_count(limit).await?)
    }

    /// Checks that storage is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }
}
