use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopicDto {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTopicDto {
    #[schema(value_type = Option<String>)]
    pub slug: Option<serde_json::Value>,
    #[schema(value_type = Option<String>)]
    pub description: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllTopicsDto {
    pub all_topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostedTopicDto {
    pub posted_topic: TopicDto,
}
