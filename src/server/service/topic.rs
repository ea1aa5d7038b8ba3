//! Topic service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::topic::TopicRepository,
    error::AppError,
    model::topic::{CreateTopicParams, Topic},
};

pub struct TopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every topic ordered by slug.
    pub async fn get_all(&self) -> Result<Vec<Topic>, AppError> {
        let topics = TopicRepository::new(self.db).get_all().await?;
        Ok(topics)
    }

    /// Creates a topic with a slug not already in use.
    ///
    /// A concurrent insert of the same slug that slips past the check is caught by
    /// the primary key and reported as a conflict by the error normalizer.
    ///
    /// # Returns
    /// - `Ok(Topic)` - The created topic
    /// - `Err(AppError::Conflict)` - A topic with this slug already exists
    /// - `Err(AppError::DbErr)` - Database error during check or insert
    pub async fn create(&self, params: CreateTopicParams) -> Result<Topic, AppError> {
        let repo = TopicRepository::new(self.db);

        if repo.find_by_slug(&params.slug).await?.is_some() {
            return Err(AppError::Conflict("Topic already exists".to_string()));
        }

        let topic = repo.create(params).await?;

        tracing::info!("Created topic {}", topic.slug);

        Ok(topic)
    }
}
