use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        topic::{AllTopicsDto, CreateTopicDto, PostedTopicDto},
    },
    server::{
        error::AppError, model::topic::CreateTopicParams, service::topic::TopicService,
        state::AppState, util::extract::ApiJson,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// List all topics.
///
/// # Returns
/// - `200 OK` - Every topic ordered by slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "All topics", body = AllTopicsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(AllTopicsDto {
            all_topics: topics.into_iter().map(|t| t.into_dto()).collect(),
        }),
    ))
}

/// Create a topic.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - `slug` and `description`, both strings
///
/// # Returns
/// - `201 Created` - The created topic
/// - `400 Bad Request` - Missing or non-string field, or malformed JSON
/// - `409 Conflict` - Slug already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/topics",
    tag = TOPIC_TAG,
    request_body = CreateTopicDto,
    responses(
        (status = 201, description = "Created topic", body = PostedTopicDto),
        (status = 400, description = "Invalid topic data", body = ErrorDto),
        (status = 409, description = "Topic already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTopicDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTopicParams::from_dto(payload)?;

    let topic = TopicService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostedTopicDto {
            posted_topic: topic.into_dto(),
        }),
    ))
}
