//! Newsboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the newsboard
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for inserting rows, fixtures for in-memory models, and a
//! canonical seed dataset.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: Build entity models without touching the database
//! - **seed**: Insert the shared topics/users/articles/comments dataset
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_articles() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_news_tables()
//!         .with_seed_data()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod seed;
