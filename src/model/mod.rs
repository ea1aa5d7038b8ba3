//! API data transfer objects.
//!
//! Request payloads and response envelopes exactly as they appear on the wire. Each
//! response envelope wraps its payload under a fixed camelCase key (`allTopics`,
//! `chosenArticle`, ...), so the JSON contract is fixed at compile time.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
