use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    #[schema(value_type = Option<String>)]
    pub username: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllArticleCommentsDto {
    pub all_article_comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCommentDto {
    pub user_comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedCommentDto {
    pub updated_comment: CommentDto,
}
