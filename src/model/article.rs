use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single article including its body and comment count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// An article as it appears in listings; the body is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateArticleDto {
    #[schema(value_type = Option<String>)]
    pub author: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub title: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub body: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub topic: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub article_img_url: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllArticlesDto {
    pub all_articles: Vec<ArticleListItemDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChosenArticleDto {
    pub chosen_article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostedArticleDto {
    pub posted_article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedArticleDto {
    pub updated_article: ArticleDto,
}
