//! In-process implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewUrlRecord, RankedUrls, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};

#[derive(Debug, Clone)]
struct StoredUrl {
    original_url: String,
    access_count: u64,
}

/// In-memory repository backed by a sharded [`DashMap`].
///
/// Creation goes through the entry API and increments mutate the entry in
/// place, both under the key's shard lock, so they are atomic per alias.
/// Data lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: DashMap<String, StoredUrl>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, RepositoryError> {
        match self.records.entry(new_record.alias.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(new_record.alias)),
            Entry::Vacant(slot) => {
                slot.insert(StoredUrl {
                    original_url: new_record.original_url.clone(),
                    access_count: 0,
                });
                Ok(new_record.into_record())
            }
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, RepositoryError> {
        Ok(self.records.get(alias).map(|stored| {
            UrlRecord::new(
                alias.to_string(),
                stored.original_url.clone(),
                stored.access_count,
            )
        }))
    }

    async fn increment_access_count(&self, alias: &str) -> Result<(), RepositoryError> {
        let mut stored = self
            .records
            .get_mut(alias)
            .ok_or_else(|| RepositoryError::NotFound(alias.to_string()))?;

        stored.access_count = stored.access_count.checked_add(1).ok_or_else(|| {
            RepositoryError::Storage(format!("access_count overflow for alias '{alias}'"))
        })?;

        Ok(())
    }

    async fn list_top_by_access_count(&self, limit: u32) -> Result<RankedUrls, RepositoryError> {
        let mut items: Vec<UrlRecord> = self
            .records
            .iter()
            .map(|entry| {
                UrlRecord::new(
                    entry.key().clone(),
                    entry.original_url.clone(),
                    entry.access_count,
                )
            })
            .collect();

        items.sort_by(|a, b| {
            b.access_count
                .cmp(&a.access_count)
                .then_with(|| a.alias.cmp(&b.alias))
        });
        items.truncate(limit as usize);

        Ok(RankedUrls::new(items))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn repo_with(aliases: &[&str]) -> MemoryUrlRepository {
        let repo = MemoryUrlRepository::new();
        for alias in aliases {
            repo.create(NewUrlRecord::new(*alias, format!("https://example.com/{alias}")))
                .await
                .unwrap();
        }
        repo
    }

    async fn increment_times(repo: &MemoryUrlRepository, alias: &str, times: u64) {
        for _ in 0..times {
            repo.increment_access_count(alias).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = MemoryUrlRepository::new();

        let created = repo
            .create(NewUrlRecord::new("docs", "https://docs.rs"))
            .await
            .unwrap();
        let found = repo.find_by_alias("docs").await.unwrap().unwrap();

        assert_eq!(created, found);
        assert_eq!(found.access_count, 0);
        assert_eq!(found.original_url, "https://docs.rs");
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = MemoryUrlRepository::new();
        assert!(repo.find_by_alias("nothing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_conflict_keeps_original() {
        let repo = repo_with(&["docs"]).await;
        increment_times(&repo, "docs", 2).await;

        let result = repo
            .create(NewUrlRecord::new("docs", "https://other.com"))
            .await;

        assert_eq!(result, Err(RepositoryError::Conflict("docs".to_string())));

        let stored = repo.find_by_alias("docs").await.unwrap().unwrap();
        assert_eq!(stored.original_url, "https://example.com/docs");
        assert_eq!(stored.access_count, 2);
    }

    #[tokio::test]
    async fn test_increment_missing_is_not_found() {
        let repo = MemoryUrlRepository::new();

        assert_eq!(
            repo.increment_access_count("ghost").await,
            Err(RepositoryError::NotFound("ghost".to_string()))
        );
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_list_top_orders_by_count_desc() {
        let aliases: Vec<String> = (0..10).map(|i| format!("alias{i:02}")).collect();
        let refs: Vec<&str> = aliases.iter().map(String::as_str).collect();
        let repo = repo_with(&refs).await;

        for (i, alias) in aliases.iter().enumerate() {
            increment_times(&repo, alias, 100 - i as u64).await;
        }

        let ranked = repo.list_top_by_access_count(2).await.unwrap();

        assert_eq!(ranked.count, 2);
        assert_eq!(ranked.items[0].alias, "alias00");
        assert_eq!(ranked.items[0].access_count, 100);
        assert_eq!(ranked.items[1].alias, "alias01");
        assert_eq!(ranked.items[1].access_count, 99);
    }

    #[tokio::test]
    async fn test_list_top_breaks_ties_by_alias() {
        let repo = repo_with(&["zeta", "alpha", "mid"]).await;
        increment_times(&repo, "zeta", 3).await;
        increment_times(&repo, "alpha", 3).await;
        increment_times(&repo, "mid", 1).await;

        let ranked = repo.list_top_by_access_count(10).await.unwrap();
        let order: Vec<&str> = ranked.items.iter().map(|r| r.alias.as_str()).collect();

        assert_eq!(order, ["alpha", "zeta", "mid"]);
        assert_eq!(ranked.count, 3);
    }

    #[tokio::test]
    async fn test_list_top_with_fewer_records_than_limit() {
        let repo = repo_with(&["one"]).await;

        let ranked = repo.list_top_by_access_count(5).await.unwrap();

        assert_eq!(ranked.count, 1);
        assert_eq!(ranked.items.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let repo = Arc::new(repo_with(&["hot"]).await);

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.increment_access_count("hot").await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let record = repo.find_by_alias("hot").await.unwrap().unwrap();
        assert_eq!(record.access_count, 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_have_single_winner() {
        let repo = Arc::new(MemoryUrlRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(NewUrlRecord::new("contested", format!("https://site{i}.com")))
                        .await
                })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(RepositoryError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 31);
        assert_eq!(repo.len(), 1);
    }
}
