use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, VoteDto},
        article::{
            AllArticlesDto, ChosenArticleDto, CreateArticleDto, PostedArticleDto,
            UpdatedArticleDto,
        },
    },
    server::{
        error::AppError,
        model::article::{CreateArticleParams, ListArticlesParams, ListArticlesQuery},
        service::article::ArticleService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath, ApiQuery},
            parse::{parse_id, parse_inc_votes},
        },
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// List articles.
///
/// Returns every article without its body, each with a comment count. Sorted by
/// `created_at` descending unless `sort_by`/`order` say otherwise.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `sort_by`, `order`, and `topic`
///
/// # Returns
/// - `200 OK` - Matching articles
/// - `400 Bad Request` - Unknown sort column or order direction
/// - `404 Not Found` - Topic filter names an unknown topic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ListArticlesQuery),
    responses(
        (status = 200, description = "Matching articles", body = AllArticlesDto),
        (status = 400, description = "Invalid sort_by or order", body = ErrorDto),
        (status = 404, description = "Topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListArticlesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = ListArticlesParams::from_query(query)?;

    let articles = ArticleService::new(&state.db).get_all(params).await?;

    Ok((
        StatusCode::OK,
        Json(AllArticlesDto {
            all_articles: articles
                .into_iter()
                .map(|a| a.into_list_item_dto())
                .collect(),
        }),
    ))
}

/// Create an article.
///
/// `article_img_url` is optional and defaults to a placeholder image.
///
/// # Returns
/// - `201 Created` - The created article with zero votes and comments
/// - `400 Bad Request` - Missing or non-string field, or malformed JSON
/// - `404 Not Found` - Unknown author or topic
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Created article", body = PostedArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 404, description = "Author or topic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateArticleParams::from_dto(payload)?;

    let article = ArticleService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostedArticleDto {
            posted_article: article.into_dto(),
        }),
    ))
}

/// Get a single article by id.
///
/// # Returns
/// - `200 OK` - The article with body and comment count
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "The article", body = ChosenArticleDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id)?;

    let article = ArticleService::new(&state.db).get_by_id(article_id).await?;

    Ok((
        StatusCode::OK,
        Json(ChosenArticleDto {
            chosen_article: article.into_dto(),
        }),
    ))
}

/// Vote on an article.
///
/// Adds `inc_votes` (possibly negative) to the article's vote count.
///
/// # Returns
/// - `201 Created` - The updated article
/// - `400 Bad Request` - Invalid id, or `inc_votes` missing or not an integer
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article id")
    ),
    request_body = VoteDto,
    responses(
        (status = 201, description = "Updated article", body = UpdatedArticleDto),
        (status = 400, description = "Invalid id or vote", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_article(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<String>,
    ApiJson(payload): ApiJson<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id)?;
    let inc_votes = parse_inc_votes(payload.inc_votes)?;

    let article = ArticleService::new(&state.db)
        .vote(article_id, inc_votes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UpdatedArticleDto {
            updated_article: article.into_dto(),
        }),
    ))
}

/// Delete an article and its comments.
///
/// # Returns
/// - `204 No Content` - Article deleted
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id)?;

    ArticleService::new(&state.db).delete(article_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
