//! Repository trait for alias storage.

use crate::domain::entities::{NewUrlRecord, RankedUrls, UrlRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by [`UrlRepository`] implementations.
///
/// `Conflict` and `NotFound` are expected outcomes of well-formed calls.
/// `Storage` is the only kind that signals a backend fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("alias already exists: {0}")]
    Conflict(String),
    #[error("alias not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Storage contract for alias records.
///
/// Implementations must back `create` with a conditional insert and
/// `increment_access_count` with an atomic add; neither may be emulated
/// with a read followed by a write. Operations are never retried here.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record with `access_count = 0` if the alias is free.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] without side effects when the
    /// alias already exists, [`RepositoryError::Storage`] on backend faults.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RepositoryError>;

    /// Point lookup. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend faults.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, RepositoryError>;

    /// Adds exactly one to the record's access count.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the alias has no record,
    /// [`RepositoryError::Storage`] on backend faults.
    async fn increment_access_count(&self, alias: &str) -> Result<(), RepositoryError>;

    /// Returns up to `limit` records ordered by `access_count` descending,
    /// ties broken by `alias` ascending.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Storage`] on backend faults.
    async fn list_top_by_access_count(&self, limit: u32) -> Result<RankedUrls, RepositoryError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
