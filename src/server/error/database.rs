//! Translation of database constraint errors into client-facing responses.
//!
//! This is the first stage of error normalization: store errors that describe a problem
//! with the request (duplicate keys, references to rows that do not exist) become 4xx
//! responses. Anything not recognized here falls through to the generic 500 handler.

use axum::http::StatusCode;
use sea_orm::{DbErr, SqlErr};

/// Maps a database error to a status code and client message when the error was caused
/// by the request rather than by the server.
///
/// # Arguments
/// - `err` - Error returned by a repository
///
/// # Returns
/// - `Some((409, msg))` - Unique constraint violation
/// - `Some((404, msg))` - Foreign key violation or missing record
/// - `None` - Any other database failure
pub fn translate(err: &DbErr) -> Option<(StatusCode, &'static str)> {
    if let DbErr::RecordNotFound(_) = err {
        return Some((StatusCode::NOT_FOUND, "Not Found"));
    }

    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(_) => Some((
            StatusCode::CONFLICT,
            "Conflict: resource already exists",
        )),
        SqlErr::ForeignKeyConstraintViolation(_) => Some((
            StatusCode::NOT_FOUND,
            "Not Found: referenced resource does not exist",
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveModelTrait, ActiveValue};
    use test_utils::{builder::TestBuilder, error::TestError, factory};

    #[test]
    fn translates_missing_record_to_not_found() {
        let err = DbErr::RecordNotFound("article".to_string());

        assert_eq!(translate(&err), Some((StatusCode::NOT_FOUND, "Not Found")));
    }

    #[test]
    fn leaves_unrelated_errors_untranslated() {
        let err = DbErr::Custom("connection reset".to_string());

        assert_eq!(translate(&err), None);
    }

    #[tokio::test]
    async fn translates_duplicate_key_to_conflict() -> Result<(), TestError> {
        let test = TestBuilder::new().with_news_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let topic = factory::create_topic(db).await?;
        let err = factory::topic::TopicFactory::new(db)
            .slug(topic.slug)
            .build()
            .await
            .unwrap_err();

        assert_eq!(
            translate(&err).map(|(status, _)| status),
            Some(StatusCode::CONFLICT)
        );

        Ok(())
    }

    #[tokio::test]
    async fn translates_dangling_reference_to_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_news_tables().build().await?;
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let err = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(9999),
            author: ActiveValue::Set(user.username),
            body: ActiveValue::Set("orphan".to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            votes: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap_err();

        assert_eq!(
            translate(&err).map(|(status, _)| status),
            Some(StatusCode::NOT_FOUND)
        );

        Ok(())
    }
}
