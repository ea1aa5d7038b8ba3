use super::*;

fn params() -> CreateArticleParams {
    CreateArticleParams {
        author: "butter_bridge".to_string(),
        title: "Hello".to_string(),
        body: "World".to_string(),
        topic: "cats".to_string(),
        article_img_url: DEFAULT_ARTICLE_IMG_URL.to_string(),
    }
}

/// Tests creating an article.
///
/// Expected: Ok(Article) with zero votes, zero comments, and the next id
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleRepository::new(db).create(params()).await?;

    assert_eq!(article.article_id, seed::ARTICLE_COUNT as i32 + 1);
    assert_eq!(article.title, "Hello");
    assert_eq!(article.topic, "cats");
    assert_eq!(article.votes, 0);
    assert_eq!(article.comment_count, 0);
    assert_eq!(article.article_img_url, DEFAULT_ARTICLE_IMG_URL);

    Ok(())
}

/// Tests that an unknown topic is rejected by the foreign key.
///
/// Expected: Err(DbErr) translated to 404
#[tokio::test]
async fn rejects_unknown_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db)
        .create(CreateArticleParams {
            topic: "dogs".to_string(),
            ..params()
        })
        .await;

    let err = result.unwrap_err();
    assert_eq!(
        crate::server::error::database::translate(&err).map(|(status, _)| status),
        Some(axum::http::StatusCode::NOT_FOUND)
    );

    Ok(())
}
