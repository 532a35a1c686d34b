mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_create_with_custom_alias() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/urls")
        .json(&json!({
            "original_url": "https://www.example.com",
            "alias": "customAlias"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["alias"], "customAlias");
    assert_eq!(json["original_url"], "https://www.example.com");
    assert_eq!(app.repository.len(), 1);
}

#[tokio::test]
async fn test_create_with_generated_alias() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/urls")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["alias"], common::GENERATED_ALIAS);
}

#[tokio::test]
async fn test_create_duplicate_alias_conflict() {
    let app = common::create_test_app();
    common::create_test_url(&app.repository, "customAlias", "https://first.example.com").await;

    let response = app
        .server
        .post("/urls")
        .json(&json!({
            "original_url": "https://second.example.com",
            "alias": "customAlias"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<Value>();
    assert_eq!(json["code"], "conflict");
    assert_eq!(json["message"], "alias already exists");

    let kept = app.server.get("/urls/customAlias").await;
    assert_eq!(kept.header("location"), "https://first.example.com");
}

#[tokio::test]
async fn test_create_generated_alias_collision_is_conflict() {
    let app = common::create_test_app();
    common::create_test_url(&app.repository, common::GENERATED_ALIAS, "https://taken.example.com")
        .await;

    let response = app
        .server
        .post("/urls")
        .json(&json!({ "original_url": "https://www.example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_missing_body() {
    let app = common::create_test_app();

    let response = app.server.post("/urls").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["code"], "bad_request");
    assert_eq!(json["message"], "missing request body");
}

#[tokio::test]
async fn test_create_invalid_json() {
    let app = common::create_test_app();

    let response = app.server.post("/urls").text("{ original_url: ").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "invalid request body");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = common::create_test_app();

    let cases = [
        (json!({ "original_URL": "123" }), "original_url must be provided"),
        (json!({ "original_url": 123 }), "original_url must be a string"),
        (json!({ "original_url": "notaurl" }), "original_url must be a valid url"),
        (
            json!({ "original_url": "https://www.example.com", "alias": "12" }),
            "alias must have at least 3 characters",
        ),
        (
            json!({ "original_url": "https://www.example.com", "alias": "#!A8SD" }),
            "alias must contain only letters, numbers and underscores",
        ),
        (json!([1, 2, 3]), "body must be an object"),
    ];

    for (body, message) in cases {
        let response = app.server.post("/urls").json(&body).await;

        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        let json = response.json::<Value>();
        assert_eq!(json["code"], "validation_error");
        assert_eq!(json["message"], message);
    }

    assert!(app.repository.is_empty());
}
