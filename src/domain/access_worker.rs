//! Background worker applying queued access events to the store.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info, warn};

use crate::domain::access_event::AccessEvent;
use crate::domain::repositories::{RepositoryError, UrlRepository};

/// Consumes access events and increments the matching counters.
///
/// Up to `concurrency` increments run at once. Failed increments are logged
/// and not retried: a failure may still have been applied by the backend,
/// and a second attempt could count the same access twice.
///
/// Returns once the channel is closed and every in-flight increment has
/// finished.
pub async fn run_access_worker(
    mut rx: mpsc::Receiver<AccessEvent>,
    repository: Arc<dyn UrlRepository>,
    concurrency: usize,
) {
    let concurrency = concurrency.max(1);
    let semaphore = Arc::new(Semaphore::new(concurrency));

    while let Some(event) = rx.recv().await {
        let Ok(permit) = semaphore.clone().acquire_owned().await else {
            break;
        };
        let repository = repository.clone();

        tokio::spawn(async move {
            let _permit = permit;
            apply_event(repository.as_ref(), event).await;
        });
    }

    // Wait for in-flight increments before reporting the worker as stopped.
    let _ = semaphore.acquire_many(concurrency as u32).await;
    info!("Access worker stopped");
}

async fn apply_event(repository: &dyn UrlRepository, event: AccessEvent) {
    match repository.increment_access_count(&event.alias).await {
        Ok(()) => debug!(
            alias = %event.alias,
            delay_ms = event.queue_delay_ms(Utc::now()),
            "Access counted"
        ),
        Err(RepositoryError::NotFound(alias)) => {
            warn!(alias = %alias, "Access for unknown alias ignored")
        }
        Err(e) => error!(alias = %event.alias, "Failed to count access: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewUrlRecord;
    use crate::domain::repositories::MockUrlRepository;
    use crate::infrastructure::persistence::MemoryUrlRepository;

    #[tokio::test]
    async fn test_worker_counts_every_event() {
        let repository = Arc::new(MemoryUrlRepository::new());
        repository
            .create(NewUrlRecord::new("docs", "https://docs.rs"))
            .await
            .unwrap();

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_access_worker(rx, repository.clone(), 4));

        for _ in 0..10 {
            tx.send(AccessEvent::new("docs")).await.unwrap();
        }
        drop(tx);
        worker.await.unwrap();

        let record = repository.find_by_alias("docs").await.unwrap().unwrap();
        assert_eq!(record.access_count, 10);
    }

    #[tokio::test]
    async fn test_worker_survives_failures() {
        let mut mock = MockUrlRepository::new();
        mock.expect_increment_access_count()
            .withf(|alias| alias == "gone")
            .times(1)
            .returning(|alias| Err(RepositoryError::NotFound(alias.to_string())));
        mock.expect_increment_access_count()
            .withf(|alias| alias == "flaky")
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("connection reset".to_string())));
        mock.expect_increment_access_count()
            .withf(|alias| alias == "docs")
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(run_access_worker(rx, Arc::new(mock), 1));

        tx.send(AccessEvent::new("gone")).await.unwrap();
        tx.send(AccessEvent::new("flaky")).await.unwrap();
        tx.send(AccessEvent::new("docs")).await.unwrap();
        drop(tx);

        worker.await.unwrap();
    }
}
