//! Article domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::Order;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::article::{ArticleDto, ArticleListItemDto, CreateArticleDto},
    server::{
        error::AppError,
        util::parse::{optional_string, require_string},
    },
};

/// Image assigned to articles created without an `article_img_url`.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// An article together with the number of comments posted on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
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

impl Article {
    /// Converts to the full DTO returned by single-article endpoints.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }

    /// Converts to the listing DTO, which omits the body.
    pub fn into_list_item_dto(self) -> ArticleListItemDto {
        ArticleListItemDto {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }

    /// Converts an entity model to an article domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `comment_count` - Number of comments referencing the article
    pub fn from_entity(entity: entity::article::Model, comment_count: i64) -> Self {
        Self {
            article_id: entity.article_id,
            title: entity.title,
            topic: entity.topic,
            author: entity.author,
            body: entity.body,
            created_at: entity.created_at,
            votes: entity.votes,
            article_img_url: entity.article_img_url,
            comment_count,
        }
    }
}

/// Validated parameters for creating an article.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: String,
}

impl CreateArticleParams {
    /// Validates an article creation payload.
    ///
    /// Fields are checked in the order `author`, `title`, `body`, `topic`; the first
    /// invalid field determines the error message. A missing `article_img_url` falls
    /// back to [`DEFAULT_ARTICLE_IMG_URL`].
    ///
    /// # Returns
    /// - `Ok(CreateArticleParams)` - All required fields present as strings
    /// - `Err(AppError::BadRequest)` - A field is missing or has the wrong type
    pub fn from_dto(dto: CreateArticleDto) -> Result<Self, AppError> {
        Ok(Self {
            author: require_string("author", dto.author)?,
            title: require_string("title", dto.title)?,
            body: require_string("body", dto.body)?,
            topic: require_string("topic", dto.topic)?,
            article_img_url: optional_string("article_img_url", dto.article_img_url)?
                .unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_string()),
        })
    }
}

/// Raw query string of the article listing endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListArticlesQuery {
    /// Column to sort by; defaults to `created_at`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`, case-insensitive; defaults to `desc`.
    pub order: Option<String>,
    /// Only return articles filed under this topic slug.
    pub topic: Option<String>,
}

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    ArticleImgUrl,
}

impl ArticleSortColumn {
    /// Looks up a column by its wire name. Anything outside the allow-list is rejected.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "article_img_url" => Ok(Self::ArticleImgUrl),
            _ => Err(AppError::BadRequest("Invalid sort_by column".to_string())),
        }
    }

    pub fn column(self) -> entity::article::Column {
        use entity::article::Column;

        match self {
            Self::ArticleId => Column::ArticleId,
            Self::Title => Column::Title,
            Self::Topic => Column::Topic,
            Self::Author => Column::Author,
            Self::CreatedAt => Column::CreatedAt,
            Self::Votes => Column::Votes,
            Self::ArticleImgUrl => Column::ArticleImgUrl,
        }
    }
}

/// Direction of an article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses `asc` or `desc` in any letter case.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(AppError::BadRequest("Invalid order query".to_string()))
        }
    }

    pub fn order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Validated article listing parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListArticlesParams {
    pub sort_by: ArticleSortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ListArticlesParams {
    /// Validates the listing query string.
    ///
    /// Topic existence is not checked here; the service does that against the store.
    ///
    /// # Returns
    /// - `Ok(ListArticlesParams)` - Defaults applied for absent values
    /// - `Err(AppError::BadRequest)` - Unknown sort column or order direction
    pub fn from_query(query: ListArticlesQuery) -> Result<Self, AppError> {
        let sort_by = match query.sort_by.as_deref() {
            Some(value) => ArticleSortColumn::parse(value)?,
            None => ArticleSortColumn::default(),
        };

        let order = match query.order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::default(),
        };

        Ok(Self {
            sort_by,
            order,
            topic: query.topic,
        })
    }
}
