use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, seed};

/// Tests listing every seeded user.
///
/// Expected: Ok with all users ordered by username
#[tokio::test]
async fn gets_all_users_ordered_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), seed::USER_COUNT);
    let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(
        usernames,
        vec!["butter_bridge", "icellusedkars", "lurker", "rogersop"]
    );

    Ok(())
}

/// Tests finding a user by username.
///
/// Expected: Ok(Some(User)) with every field populated
#[tokio::test]
async fn finds_user_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("weegembump")
        .name("Gemma Bump")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_by_username("weegembump")
        .await?
        .unwrap();

    assert_eq!(user.username, created.username);
    assert_eq!(user.name, "Gemma Bump");
    assert_eq!(user.avatar_url, created.avatar_url);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .with_seed_data()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_username("nobody").await?;

    assert!(user.is_none());

    Ok(())
}
