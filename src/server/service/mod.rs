//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence Checks**: Confirming referenced articles, topics, and users exist
//! - **Orchestration**: Sequencing repository calls for a single operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Signalling**: Reporting missing or conflicting resources as `AppError`
//!
//! Request shape validation (ids, required fields, sort columns) happens before a
//! service is called, when the controller builds the parameter types.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

/// Message for an article id with no matching row.
pub const ARTICLE_NOT_FOUND: &str = "Article ID not Found";

/// Message for a comment id with no matching row.
pub const COMMENT_NOT_FOUND: &str = "Comment ID not Found";

/// Message for a username with no matching row.
pub const USERNAME_NOT_FOUND: &str = "Username not Found";

/// Message for a vote delta that would push a count outside the integer range.
pub const VOTES_OUT_OF_RANGE: &str = "inc_votes is out of range";
