//! Extractors whose rejections are reported as `{"msg": ...}` 400 responses.
//!
//! Each wraps the matching axum extractor and converts its rejection into
//! `AppError::BadRequest` instead of axum's plain-text body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor.
///
/// A missing `Content-Type` header or a body that is not valid JSON becomes a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor; duplicated or malformed keys become a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor; segments that are not valid UTF-8 become a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
