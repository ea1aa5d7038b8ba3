//! Topic domain models and parameters.

use crate::{
    model::topic::{CreateTopicDto, TopicDto},
    server::{error::AppError, util::parse::require_string},
};

/// A topic articles can be filed under, identified by its slug.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

impl Topic {
    pub fn into_dto(self) -> TopicDto {
        TopicDto {
            slug: self.slug,
            description: self.description,
        }
    }

    pub fn from_entity(entity: entity::topic::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }
}

/// Validated parameters for creating a topic.
#[derive(Debug, Clone)]
pub struct CreateTopicParams {
    pub slug: String,
    pub description: String,
}

impl CreateTopicParams {
    /// Validates a topic creation payload.
    ///
    /// # Returns
    /// - `Ok(CreateTopicParams)` - Both fields present as strings
    /// - `Err(AppError::BadRequest)` - A field is missing or not a string
    pub fn from_dto(dto: CreateTopicDto) -> Result<Self, AppError> {
        Ok(Self {
            slug: require_string("slug", dto.slug)?,
            description: require_string("description", dto.description)?,
        })
    }
}
