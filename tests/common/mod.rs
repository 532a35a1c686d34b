#![allow(dead_code)]

use alias_shortener::application::services::UrlService;
use alias_shortener::domain::access_event::AccessEvent;
use alias_shortener::domain::entities::NewUrlRecord;
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::infrastructure::persistence::MemoryUrlRepository;
use alias_shortener::routes::base_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::AliasGenerator;
use axum_test::TestServer;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const GENERATED_ALIAS: &str = "gen_1234";

/// Always hands out the same alias, so collisions are easy to provoke.
pub struct FixedAliasGenerator(pub &'static str);

impl AliasGenerator for FixedAliasGenerator {
    fn generate(&self, _length: usize) -> String {
        self.0.to_string()
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<MemoryUrlRepository>,
    pub access_rx: mpsc::Receiver<AccessEvent>,
}

pub fn create_test_state(
    queue_capacity: usize,
) -> (
    AppState,
    mpsc::Receiver<AccessEvent>,
    Arc<MemoryUrlRepository>,
) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let (tx, rx) = mpsc::channel(queue_capacity);

    let url_service = Arc::new(UrlService::new(
        repository.clone(),
        Arc::new(FixedAliasGenerator(GENERATED_ALIAS)),
        8,
    ));

    (AppState::new(url_service, tx), rx, repository)
}

pub fn create_test_app() -> TestApp {
    let (state, access_rx, repository) = create_test_state(100);
    let server = TestServer::new(base_router(state)).unwrap();

    TestApp {
        server,
        repository,
        access_rx,
    }
}

pub async fn create_test_url(repository: &MemoryUrlRepository, alias: &str, url: &str) {
    repository
        .create(NewUrlRecord::new(alias, url))
        .await
        .unwrap();
}

pub async fn add_accesses(repository: &MemoryUrlRepository, alias: &str, times: u64) {
    for _ in 0..times {
        repository.increment_access_count(alias).await.unwrap();
    }
}
