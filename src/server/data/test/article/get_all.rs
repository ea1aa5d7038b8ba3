use super::*;

/// Tests the default listing order.
///
/// Expected: every article, newest first, with per-article comment counts
#[tokio::test]
async fn lists_newest_first_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams::default())
        .await?;

    assert_eq!(articles.len(), seed::ARTICLE_COUNT);
    let ids: Vec<i32> = articles.iter().map(|a| a.article_id).collect();
    assert_eq!(ids, vec![3, 6, 2, 5, 1, 4, 7]);

    for article in &articles {
        let expected = seed::COMMENT_COUNTS[(article.article_id - 1) as usize];
        assert_eq!(article.comment_count, expected);
    }

    Ok(())
}

/// Tests sorting by votes ascending.
///
/// Expected: vote counts are non-decreasing
#[tokio::test]
async fn sorts_by_votes_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams {
            sort_by: ArticleSortColumn::Votes,
            order: SortOrder::Asc,
            topic: None,
        })
        .await?;

    assert!(articles.windows(2).all(|pair| pair[0].votes <= pair[1].votes));
    assert_eq!(articles.last().map(|a| a.article_id), Some(1));

    Ok(())
}

/// Tests sorting by title descending.
///
/// Expected: "Z" first
#[tokio::test]
async fn sorts_by_title_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams {
            sort_by: ArticleSortColumn::Title,
            order: SortOrder::Desc,
            topic: None,
        })
        .await?;

    assert_eq!(articles[0].title, "Z");
    assert!(articles.windows(2).all(|pair| pair[0].title >= pair[1].title));

    Ok(())
}

/// Tests filtering by topic.
///
/// Expected: only articles filed under `mitch`
#[tokio::test]
async fn filters_by_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams {
            topic: Some("mitch".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(articles.len(), seed::MITCH_ARTICLE_COUNT);
    assert!(articles.iter().all(|a| a.topic == "mitch"));

    Ok(())
}

/// Tests that a filtered listing still reports each article's own comment count.
///
/// Expected: the single `cats` article with its 2 comments
#[tokio::test]
async fn counts_comments_within_filtered_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams {
            topic: Some("cats".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article_id, 5);
    assert_eq!(articles[0].comment_count, 2);

    Ok(())
}

/// Tests filtering by a topic without articles.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list_for_topic_without_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let articles = ArticleRepository::new(db)
        .get_all(&ListArticlesParams {
            topic: Some("paper".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(articles.is_empty());

    Ok(())
}
