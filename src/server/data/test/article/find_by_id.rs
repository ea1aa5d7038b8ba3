use super::*;

/// Tests fetching an article with its comment count.
///
/// Expected: Ok(Some(Article)) with comment_count 4 for seeded article 1
#[tokio::test]
async fn finds_article_with_comment_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleRepository::new(db).find_by_id(1).await?.unwrap();

    assert_eq!(article.article_id, 1);
    assert_eq!(article.title, "Living in the shadow of a great man");
    assert_eq!(article.topic, "mitch");
    assert_eq!(article.author, "butter_bridge");
    assert_eq!(article.votes, 100);
    assert_eq!(article.comment_count, 4);

    Ok(())
}

/// Expected: Ok(Some(Article)) with comment_count 0
#[tokio::test]
async fn counts_zero_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleRepository::new(db).find_by_id(2).await?.unwrap();

    assert_eq!(article.comment_count, 0);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.find_by_id(9999).await?.is_none());
    assert!(!repo.exists(9999).await?);
    assert!(repo.exists(1).await?);

    Ok(())
}
