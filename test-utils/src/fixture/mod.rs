//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of domain conversions and
//! DTO shaping. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let article = fixture::article::entity();
//! let comment = fixture::comment::entity();
//! ```

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

pub use article::entity as article_entity;
pub use comment::entity as comment_entity;
pub use topic::entity as topic_entity;
pub use user::entity as user_entity;
