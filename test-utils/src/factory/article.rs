//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default image URL assigned to factory-created articles.
pub const DEFAULT_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Factory for creating test articles with customizable fields.
///
/// The topic slug and author username must reference existing rows.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, "mitch", "butter_bridge")
///     .title("Living in the shadow of a great man")
///     .votes(100)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    topic: String,
    author: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - body: `"Body of article {id}"`
    /// - created_at: `Utc::now()`
    /// - votes: `0`
    /// - article_img_url: [`DEFAULT_IMG_URL`]
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `topic` - Slug of an existing topic
    /// - `author` - Username of an existing user
    pub fn new(db: &'a DatabaseConnection, topic: &str, author: &str) -> Self {
        let id = next_id();
        Self {
            db,
            topic: topic.to_string(),
            author: author.to_string(),
            title: format!("Article {}", id),
            body: format!("Body of article {}", id),
            created_at: Utc::now(),
            votes: 0,
            article_img_url: DEFAULT_IMG_URL.to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn article_img_url(mut self, article_img_url: impl Into<String>) -> Self {
        self.article_img_url = article_img_url.into();
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown topic or author)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            topic: ActiveValue::Set(self.topic),
            author: ActiveValue::Set(self.author),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            votes: ActiveValue::Set(self.votes),
            article_img_url: ActiveValue::Set(self.article_img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values for the given topic and author.
///
/// Shorthand for `ArticleFactory::new(db, topic, author).build().await`.
pub async fn create_article(
    db: &DatabaseConnection,
    topic: &str,
    author: &str,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, topic, author).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_article_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_news_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let topic = factory::create_topic(db).await?;
        let user = factory::create_user(db).await?;
        let article = create_article(db, &topic.slug, &user.username).await?;

        assert!(article.article_id > 0);
        assert_eq!(article.topic, topic.slug);
        assert_eq!(article.author, user.username);
        assert_eq!(article.votes, 0);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_unknown_author() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_news_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let topic = factory::create_topic(db).await?;
        let result = create_article(db, &topic.slug, "nobody").await;

        assert!(result.is_err());

        Ok(())
    }
}
