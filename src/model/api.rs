use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// Static documentation served at `GET /api`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsDto {
    #[schema(value_type = Object)]
    pub endpoints: serde_json::Value,
}

/// Body of the article and comment vote endpoints.
///
/// `inc_votes` stays untyped so that a missing value and a non-numeric value can be
/// rejected with distinct messages.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    #[schema(value_type = Option<i32>)]
    pub inc_votes: Option<serde_json::Value>,
}
