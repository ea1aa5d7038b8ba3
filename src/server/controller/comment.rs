use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, VoteDto},
        comment::{AllArticleCommentsDto, CreateCommentDto, UpdatedCommentDto, UserCommentDto},
    },
    server::{
        error::AppError,
        model::comment::CreateCommentParams,
        service::comment::CommentService,
        state::AppState,
        util::{
            extract::{ApiJson, ApiPath},
            parse::{parse_id, parse_inc_votes},
        },
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List the comments on an article, newest first.
///
/// # Returns
/// - `200 OK` - Comments, possibly empty
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Comments on the article", body = AllArticleCommentsDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id)?;

    let comments = CommentService::new(&state.db)
        .get_by_article_id(article_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AllArticleCommentsDto {
            all_article_comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Post a comment on an article.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Article to comment on
/// - `payload` - `username` of an existing user and the comment `body`
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Invalid id, or missing or non-string field
/// - `404 Not Found` - Unknown article or username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Created comment", body = UserCommentDto),
        (status = 400, description = "Invalid id or comment data", body = ErrorDto),
        (status = 404, description = "Article or username not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ApiPath(article_id): ApiPath<String>,
    ApiJson(payload): ApiJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id)?;
    let params = CreateCommentParams::from_dto(article_id, payload)?;

    let comment = CommentService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCommentDto {
            user_comment: comment.into_dto(),
        }),
    ))
}

/// Vote on a comment.
///
/// # Returns
/// - `201 Created` - The updated comment
/// - `400 Bad Request` - Invalid id, or `inc_votes` missing or not an integer
/// - `404 Not Found` - No comment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    request_body = VoteDto,
    responses(
        (status = 201, description = "Updated comment", body = UpdatedCommentDto),
        (status = 400, description = "Invalid id or vote", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote_comment(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<String>,
    ApiJson(payload): ApiJson<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id)?;
    let inc_votes = parse_inc_votes(payload.inc_votes)?;

    let comment = CommentService::new(&state.db)
        .vote(comment_id, inc_votes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UpdatedCommentDto {
            updated_comment: comment.into_dto(),
        }),
    ))
}

/// Delete a comment.
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No comment with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(comment_id): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id)?;

    CommentService::new(&state.db).delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
