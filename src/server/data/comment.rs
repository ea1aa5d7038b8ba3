//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{votes_plus, votes_stay_in_range},
    model::comment::{Comment, CreateCommentParams},
};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every comment on an article, newest first.
    ///
    /// Does not check that the article exists; an unknown article yields an empty list.
    ///
    /// # Arguments
    /// - `article_id` - Article to list comments for
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments ordered by `created_at` descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a comment with zero votes, timestamped now.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment with its assigned id
    /// - `Err(DbErr)` - Database error, including foreign key violations for an unknown
    ///   article or author
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(params.article_id),
            author: ActiveValue::Set(params.username),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(Utc::now()),
            votes: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    /// Checks whether a comment exists without loading it.
    pub async fn exists(&self, comment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Comment::find_by_id(comment_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds `inc_votes` to a comment's vote count in a single UPDATE.
    ///
    /// Like articles, the row is only updated when the new count fits in `i32`.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The comment after the update
    /// - `Ok(None)` - No comment with that id, or the new count would overflow
    /// - `Err(DbErr)` - Database error during update or re-read
    pub async fn increment_votes(
        &self,
        comment_id: i32,
        inc_votes: i32,
    ) -> Result<Option<Comment>, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .col_expr(
                entity::comment::Column::Votes,
                votes_plus(entity::comment::Column::Votes, inc_votes),
            )
            .filter(entity::comment::Column::CommentId.eq(comment_id))
            .filter(votes_stay_in_range(entity::comment::Column::Votes, inc_votes))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let comment = entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await?;

        Ok(comment.map(Comment::from_entity))
    }

    /// Deletes a comment by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The comment was deleted
    /// - `Ok(false)` - No comment with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
