//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams},
    service::{ARTICLE_NOT_FOUND, COMMENT_NOT_FOUND, USERNAME_NOT_FOUND, VOTES_OUT_OF_RANGE},
};

/// Service providing business logic for comments.
///
/// Every operation scoped to an article first confirms that the article exists, so
/// an unknown article is a 404 rather than an empty result.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists an article's comments, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, empty when the article has none
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        self.ensure_article_exists(article_id).await?;

        let comments = CommentRepository::new(self.db)
            .get_by_article_id(article_id)
            .await?;

        Ok(comments)
    }

    /// Posts a comment on an article.
    ///
    /// The article is checked before the author.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment with zero votes
    /// - `Err(AppError::NotFound)` - Unknown article or unknown username
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        self.ensure_article_exists(params.article_id).await?;

        if UserRepository::new(self.db)
            .find_by_username(&params.username)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(USERNAME_NOT_FOUND.to_string()));
        }

        let comment = CommentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created comment {} on article {}",
            comment.comment_id,
            comment.article_id
        );

        Ok(comment)
    }

    /// Applies a vote delta to a comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment after the update
    /// - `Err(AppError::BadRequest)` - The new vote count would not fit in `i32`
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn vote(&self, comment_id: i32, inc_votes: i32) -> Result<Comment, AppError> {
        let repo = CommentRepository::new(self.db);

        if let Some(comment) = repo.increment_votes(comment_id, inc_votes).await? {
            return Ok(comment);
        }

        if repo.exists(comment_id).await? {
            Err(AppError::BadRequest(VOTES_OUT_OF_RANGE.to_string()))
        } else {
            Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()))
        }
    }

    /// Deletes a comment.
    ///
    /// # Returns
    /// - `Ok(())` - Comment deleted
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, comment_id: i32) -> Result<(), AppError> {
        let deleted = CommentRepository::new(self.db).delete(comment_id).await?;

        if !deleted {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted comment {}", comment_id);

        Ok(())
    }

    async fn ensure_article_exists(&self, article_id: i32) -> Result<(), AppError> {
        if ArticleRepository::new(self.db).exists(article_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(ARTICLE_NOT_FOUND.to_string()))
        }
    }
}
