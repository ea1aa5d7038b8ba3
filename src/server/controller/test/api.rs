use super::*;

#[tokio::test]
async fn serves_endpoint_documentation() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api").await;

    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_object().unwrap();
    assert!(endpoints.contains_key("GET /api"));
    assert!(endpoints.contains_key("GET /api/articles"));
    assert!(endpoints.contains_key("PATCH /api/comments/:comment_id"));
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/articles/{article_id}"].is_object());
    assert!(body["components"]["schemas"]["ArticleDto"].is_object());
}

#[tokio::test]
async fn answers_unknown_route_with_json_404() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/not-a-route").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Route Not Found");
}

#[tokio::test]
async fn answers_unsupported_method_with_json_404() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::PUT, "/api/topics", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Route Not Found");
}

#[tokio::test]
async fn allows_any_origin() {
    let app = seeded_app().await;

    let request = Request::builder()
        .uri("/api/topics")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
