use super::*;
use serde_json::json;
use test_utils::seed;

use crate::server::model::article::DEFAULT_ARTICLE_IMG_URL;

#[tokio::test]
async fn gets_article_by_id() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/articles/1").await;

    assert_eq!(status, StatusCode::OK);
    let article = body["chosenArticle"].as_object().unwrap();
    assert_eq!(article.len(), 9);
    assert_eq!(article["article_id"], 1);
    assert_eq!(article["title"], "Living in the shadow of a great man");
    assert_eq!(article["topic"], "mitch");
    assert_eq!(article["author"], "butter_bridge");
    assert!(article["body"].is_string());
    assert!(article["created_at"].is_string());
    assert_eq!(article["votes"], 100);
    assert!(article["article_img_url"].is_string());
    assert_eq!(article["comment_count"], 4);
}

#[tokio::test]
async fn rejects_bad_article_id() {
    let app = seeded_app().await;

    let (missing, body) = get(&app, "/api/articles/9999").await;
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Article ID not Found");

    let (invalid, body) = get(&app, "/api/articles/abc").await;
    assert_eq!(invalid, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "Bad Request: invalid id");

    let (overflow, body) = get(&app, "/api/articles/99999999999").await;
    assert_eq!(overflow, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "Bad Request: invalid id");
}

#[tokio::test]
async fn lists_articles_newest_first_without_body() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/articles").await;

    assert_eq!(status, StatusCode::OK);
    let articles = body["allArticles"].as_array().unwrap();
    assert_eq!(articles.len(), seed::ARTICLE_COUNT);

    let timestamps: Vec<&str> = articles
        .iter()
        .map(|a| a["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = timestamps.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(timestamps, sorted);

    for article in articles {
        assert!(article.get("body").is_none());
        assert!(article["comment_count"].is_number());
    }

    let first = articles.iter().find(|a| a["article_id"] == 1).unwrap();
    assert_eq!(first["comment_count"], 4);
}

#[tokio::test]
async fn sorts_articles_by_votes_ascending() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/articles?sort_by=votes&order=asc").await;

    assert_eq!(status, StatusCode::OK);
    let votes: Vec<i64> = body["allArticles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["votes"].as_i64().unwrap())
        .collect();
    assert!(votes.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn filters_articles_by_topic() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/articles?topic=mitch").await;

    assert_eq!(status, StatusCode::OK);
    let articles = body["allArticles"].as_array().unwrap();
    assert_eq!(articles.len(), seed::MITCH_ARTICLE_COUNT);
    assert!(articles.iter().all(|a| a["topic"] == "mitch"));

    let (status, body) = get(&app, "/api/articles?topic=paper").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allArticles"], json!([]));
}

#[tokio::test]
async fn rejects_invalid_listing_queries_with_distinct_messages() {
    let app = seeded_app().await;

    let (sort_status, sort_body) = get(&app, "/api/articles?sort_by=body").await;
    let (order_status, order_body) = get(&app, "/api/articles?order=sideways").await;
    let (topic_status, topic_body) = get(&app, "/api/articles?topic=dogs").await;

    assert_eq!(sort_status, StatusCode::BAD_REQUEST);
    assert_eq!(order_status, StatusCode::BAD_REQUEST);
    assert_eq!(topic_status, StatusCode::NOT_FOUND);

    let messages = [msg(&sort_body), msg(&order_body), msg(&topic_body)];
    assert_eq!(
        messages,
        ["Invalid sort_by column", "Invalid order query", "Topic Not Found"]
    );
}

#[tokio::test]
async fn returns_identical_data_on_repeated_reads() {
    let app = seeded_app().await;

    let (_, first) = get(&app, "/api/articles?sort_by=title").await;
    let (_, second) = get(&app, "/api/articles?sort_by=title").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn votes_on_article() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/articles/2",
        Some(json!({ "inc_votes": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["updatedArticle"]["article_id"], 2);
    assert_eq!(body["updatedArticle"]["votes"], 100);

    let (_, body) = send(
        &app,
        Method::PATCH,
        "/api/articles/2",
        Some(json!({ "inc_votes": -150 })),
    )
    .await;
    assert_eq!(body["updatedArticle"]["votes"], -50);
}

#[tokio::test]
async fn rejects_bad_article_votes() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/articles/2",
        Some(json!({ "inc_votes": "ten" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "inc_votes is not a number");

    let (status, body) = send(&app, Method::PATCH, "/api/articles/2", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "inc_votes is not defined");

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/articles/9999",
        Some(json!({ "inc_votes": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Article ID not Found");
}

#[tokio::test]
async fn rejects_vote_beyond_integer_range() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/articles/1",
        Some(json!({ "inc_votes": 2147483647 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "inc_votes is out of range");

    let (status, body) = get(&app, "/api/articles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["chosenArticle"]["votes"], 100);

    let (status, _) = get(&app, "/api/articles").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn creates_article_with_default_image() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/articles",
        Some(json!({
            "author": "rogersop",
            "title": "Cats are not dogs",
            "body": "A thorough investigation",
            "topic": "cats"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let article = &body["postedArticle"];
    assert_eq!(article["article_id"], seed::ARTICLE_COUNT as i64 + 1);
    assert_eq!(article["votes"], 0);
    assert_eq!(article["comment_count"], 0);
    assert_eq!(article["article_img_url"], DEFAULT_ARTICLE_IMG_URL);
    assert!(article["created_at"].is_string());
}

#[tokio::test]
async fn rejects_article_with_unknown_references() {
    let app = seeded_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/articles",
        Some(json!({
            "author": "banana",
            "title": "t",
            "body": "b",
            "topic": "cats"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Not Found: referenced resource does not exist");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/articles",
        Some(json!({ "author": "rogersop", "title": "t", "body": "b" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "topic is not defined");
}

#[tokio::test]
async fn deletes_article_with_its_comments() {
    let app = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/articles/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = get(&app, "/api/articles/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PATCH, "/api/comments/1", Some(json!({ "inc_votes": 1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/api/articles/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Article ID not Found");
}

#[tokio::test]
async fn reports_malformed_query_and_path_as_json() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/api/articles?sort_by=votes&sort_by=title").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(msg(&body).contains("sort_by"));

    let (status, body) = get(&app, "/api/articles/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!msg(&body).is_empty());

    let (status, body) = get(&app, "/api/articles/%FF/comments").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!msg(&body).is_empty());
}
