//! Article service for business logic.
//!
//! This module provides the `ArticleService`, which resolves articles by id, checks
//! listing topics against the store, and turns missing rows into `NotFound` errors.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, topic::TopicRepository},
    error::AppError,
    model::article::{Article, CreateArticleParams, ListArticlesParams},
    service::{ARTICLE_NOT_FOUND, VOTES_OUT_OF_RANGE},
};

/// Service providing business logic for articles.
pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    /// Creates a new ArticleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an article with its comment count.
    ///
    /// # Returns
    /// - `Ok(Article)` - Article found
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, article_id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| AppError::NotFound(ARTICLE_NOT_FOUND.to_string()))
    }

    /// Lists articles sorted and optionally filtered by topic.
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Matching articles; empty for a topic without articles
    /// - `Err(AppError::NotFound)` - The topic filter names a topic that does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self, params: ListArticlesParams) -> Result<Vec<Article>, AppError> {
        if let Some(topic) = &params.topic {
            let exists = TopicRepository::new(self.db)
                .find_by_slug(topic)
                .await?
                .is_some();

            if !exists {
                return Err(AppError::NotFound("Topic Not Found".to_string()));
            }
        }

        let articles = ArticleRepository::new(self.db).get_all(&params).await?;

        Ok(articles)
    }

    /// Creates an article.
    ///
    /// An unknown author or topic is rejected by the store's foreign keys; the error
    /// normalizer reports that as 404.
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article with zero votes and zero comments
    /// - `Err(AppError::DbErr)` - Foreign key violation or other database error
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let article = ArticleRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created article {} by {}",
            article.article_id,
            article.author
        );

        Ok(article)
    }

    /// Applies a vote delta to an article.
    ///
    /// # Returns
    /// - `Ok(Article)` - The article after the update
    /// - `Err(AppError::BadRequest)` - The new vote count would not fit in `i32`
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn vote(&self, article_id: i32, inc_votes: i32) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);

        if let Some(article) = repo.increment_votes(article_id, inc_votes).await? {
            return Ok(article);
        }

        if repo.exists(article_id).await? {
            Err(AppError::BadRequest(VOTES_OUT_OF_RANGE.to_string()))
        } else {
            Err(AppError::NotFound(ARTICLE_NOT_FOUND.to_string()))
        }
    }

    /// Deletes an article and, through the cascading foreign key, its comments.
    ///
    /// # Returns
    /// - `Ok(())` - Article deleted
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, article_id: i32) -> Result<(), AppError> {
        let deleted = ArticleRepository::new(self.db).delete(article_id).await?;

        if !deleted {
            return Err(AppError::NotFound(ARTICLE_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted article {}", article_id);

        Ok(())
    }
}
