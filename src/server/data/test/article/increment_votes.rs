use super::*;

/// Tests adjusting an article's votes.
///
/// Expected: Ok(Some(Article)) with votes adjusted and comment count intact
#[tokio::test]
async fn increments_and_decrements_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    let up = repo.increment_votes(1, 2).await?.unwrap();
    assert_eq!(up.votes, 102);
    assert_eq!(up.comment_count, 4);

    let down = repo.increment_votes(1, -200).await?.unwrap();
    assert_eq!(down.votes, -98);

    Ok(())
}

/// Tests that only the targeted article changes.
///
/// Expected: other articles keep their votes
#[tokio::test]
async fn leaves_other_articles_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (topic, user, first) = factory::helpers::create_article_with_dependencies(db).await?;
    let second = factory::article::ArticleFactory::new(db, &topic.slug, &user.username)
        .votes(7)
        .build()
        .await?;

    ArticleRepository::new(db)
        .increment_votes(first.article_id, 5)
        .await?;

    let reloaded = entity::prelude::Article::find_by_id(second.article_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reloaded.votes, 7);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ArticleRepository::new(db).increment_votes(9999, 1).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests a delta that would push the count past `i32::MAX`.
///
/// Expected: Ok(None) and the stored count unchanged, so the row stays readable
#[tokio::test]
async fn refuses_overflowing_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert!(repo.increment_votes(1, i32::MAX).await?.is_none());

    let article = repo.find_by_id(1).await?.unwrap();
    assert_eq!(article.votes, 100);

    Ok(())
}

/// Expected: Ok(Some) when the count lands exactly on `i32::MAX`
#[tokio::test]
async fn allows_delta_up_to_the_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = ArticleRepository::new(db)
        .increment_votes(1, i32::MAX - 100)
        .await?
        .unwrap();

    assert_eq!(article.votes, i32::MAX);

    Ok(())
}
