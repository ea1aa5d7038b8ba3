//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database; foreign keys
//! (article topic/author, comment article/author) are passed in explicitly, and the
//! `helpers` module creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let topic = factory::topic::create_topic(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (topic, user, article) = factory::helpers::create_article_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, &topic.slug, &user.username)
//!     .title("Custom title")
//!     .votes(42)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod topic;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::create_article;
pub use comment::create_comment;
pub use topic::create_topic;
pub use user::create_user;
