use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{AllUsersDto, SpecifiedUserDto},
    },
    server::{
        error::AppError, service::user::UserService, state::AppState, util::extract::ApiPath,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Returns
/// - `200 OK` - Every user ordered by username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = AllUsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(AllUsersDto {
            all_users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get a single user by username.
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "The user", body = SpecifiedUserDto),
        (status = 404, description = "Username not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_username(&username)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SpecifiedUserDto {
            specified_user: user.into_dto(),
        }),
    ))
}
