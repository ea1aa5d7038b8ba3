//! HTTP request handlers.
//!
//! Each handler parses its path, query, and body into validated parameter types, calls
//! exactly one service operation, and wraps the result in the response envelope for its
//! route. Every handler carries a `#[utoipa::path]` annotation that feeds the OpenAPI
//! document.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
