use super::*;

/// Tests deleting an article along with its comments.
///
/// Expected: Ok(true), and no comments left referencing the article
#[tokio::test]
async fn deletes_article_and_its_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.delete(1).await?);
    assert!(repo.find_by_id(1).await?.is_none());

    let orphaned = entity::prelude::Comment::find()
        .filter(entity::comment::Column::ArticleId.eq(1))
        .count(db)
        .await?;
    assert_eq!(orphaned, 0);

    let remaining = entity::prelude::Comment::find().count(db).await?;
    assert_eq!(
        remaining,
        (seed::COMMENT_COUNT as i64 - seed::COMMENT_COUNTS[0]) as u64
    );

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ArticleRepository::new(db).delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
