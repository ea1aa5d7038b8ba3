//! SeaORM entity models for the newsboard schema.
//!
//! The `migration` crate owns the DDL; these models mirror it column for column.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
