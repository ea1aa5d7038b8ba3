use super::*;
use serde_json::json;

#[tokio::test]
async fn lists_topics() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/topics").await;

    assert_eq!(status, StatusCode::OK);
    let topics = body["allTopics"].as_array().unwrap();
    assert_eq!(topics.len(), test_utils::seed::TOPIC_COUNT);
    for topic in topics {
        assert!(topic["slug"].is_string());
        assert!(topic["description"].is_string());
    }
}

#[tokio::test]
async fn creates_topic() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/topics",
        Some(json!({ "slug": "coding", "description": "Code is love, code is life" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["postedTopic"],
        json!({ "slug": "coding", "description": "Code is love, code is life" })
    );

    let (_, listing) = get(&app, "/api/topics").await;
    assert_eq!(
        listing["allTopics"].as_array().unwrap().len(),
        test_utils::seed::TOPIC_COUNT + 1
    );
}

#[tokio::test]
async fn rejects_duplicate_topic() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/topics",
        Some(json!({ "slug": "mitch", "description": "again" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(msg(&body), "Topic already exists");
}

#[tokio::test]
async fn rejects_incomplete_topic() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/topics",
        Some(json!({ "description": "no slug" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "slug is not defined");
}

#[tokio::test]
async fn rejects_malformed_json() {
    let app = seeded_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/topics")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"slug\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(!msg(&body).is_empty());
}
