mod common;

use alias_shortener::domain::access_worker::run_access_worker;
use alias_shortener::domain::repositories::UrlRepository;
use alias_shortener::routes::base_router;
use axum_test::TestServer;
use serde_json::Value;
use std::time::Duration;

#[tokio::test]
async fn test_redirect_success() {
    let mut app = common::create_test_app();
    common::create_test_url(&app.repository, "docs", "https://docs.rs").await;

    let response = app.server.get("/urls/docs").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://docs.rs");
    assert_eq!(
        response.json::<Value>()["message"],
        "Redirecting to https://docs.rs"
    );

    let event = app.access_rx.try_recv().unwrap();
    assert_eq!(event.alias, "docs");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let mut app = common::create_test_app();

    let response = app.server.get("/urls/ghost").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["code"], "not_found");
    assert_eq!(json["message"], "alias not found");
    assert!(app.access_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_with_full_queue_still_redirects() {
    let (state, _rx, repository) = common::create_test_state(1);
    common::create_test_url(&repository, "docs", "https://docs.rs").await;
    let server = TestServer::new(base_router(state)).unwrap();

    server
        .get("/urls/docs")
        .await
        .assert_status(axum::http::StatusCode::FOUND);

    let response = server.get("/urls/docs").await;
    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://docs.rs");
}

#[tokio::test]
async fn test_redirects_are_counted_by_worker() {
    let (state, rx, repository) = common::create_test_state(100);
    common::create_test_url(&repository, "docs", "https://docs.rs").await;

    tokio::spawn(run_access_worker(rx, repository.clone(), 4));
    let server = TestServer::new(base_router(state)).unwrap();

    for _ in 0..5 {
        server
            .get("/urls/docs")
            .await
            .assert_status(axum::http::StatusCode::FOUND);
    }

    let mut count = 0;
    for _ in 0..100 {
        count = repository
            .find_by_alias("docs")
            .await
            .unwrap()
            .unwrap()
            .access_count;
        if count == 5 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(count, 5);
}

#[tokio::test]
async fn test_redirect_does_not_count_synchronously() {
    let app = common::create_test_app();
    common::create_test_url(&app.repository, "docs", "https://docs.rs").await;

    app.server.get("/urls/docs").await;

    let record = app.repository.find_by_alias("docs").await.unwrap().unwrap();
    assert_eq!(record.access_count, 0);
}
