//! Topic data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::topic::{CreateTopicParams, Topic};

/// Repository providing database operations for topics.
pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every topic ordered by slug.
    ///
    /// # Returns
    /// - `Ok(Vec<Topic>)` - All topics, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Topic>, DbErr> {
        let topics = entity::prelude::Topic::find()
            .order_by_asc(entity::topic::Column::Slug)
            .all(self.db)
            .await?;

        Ok(topics.into_iter().map(Topic::from_entity).collect())
    }

    /// Finds a topic by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Topic))` - Topic exists
    /// - `Ok(None)` - No topic with that slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Topic>, DbErr> {
        let topic = entity::prelude::Topic::find_by_id(slug.to_string())
            .one(self.db)
            .await?;

        Ok(topic.map(Topic::from_entity))
    }

    /// Inserts a new topic.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The inserted topic
    /// - `Err(DbErr)` - Database error, including a unique violation for a duplicate slug
    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, DbErr> {
        let topic = entity::topic::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            description: ActiveValue::Set(params.description),
        }
        .insert(self.db)
        .await?;

        Ok(Topic::from_entity(topic))
    }
}
