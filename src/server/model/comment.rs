//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CreateCommentDto},
    server::{error::AppError, util::parse::require_string},
};

/// A comment left by a user on an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            article_id: self.article_id,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
        }
    }

    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            article_id: entity.article_id,
            author: entity.author,
            body: entity.body,
            created_at: entity.created_at,
            votes: entity.votes,
        }
    }
}

/// Validated parameters for posting a comment on an article.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub article_id: i32,
    /// Username of the comment author; must reference an existing user.
    pub username: String,
    pub body: String,
}

impl CreateCommentParams {
    /// Validates a comment payload for the given article.
    ///
    /// # Returns
    /// - `Ok(CreateCommentParams)` - `username` and `body` present as strings
    /// - `Err(AppError::BadRequest)` - A field is missing or not a string
    pub fn from_dto(article_id: i32, dto: CreateCommentDto) -> Result<Self, AppError> {
        Ok(Self {
            article_id,
            username: require_string("username", dto.username)?,
            body: require_string("body", dto.body)?,
        })
    }
}
