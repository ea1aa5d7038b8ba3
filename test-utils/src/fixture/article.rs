//! Article fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating article entity models without database insertion.

use chrono::{DateTime, TimeZone, Utc};
use entity::article;

use crate::fixture::{topic, user};

/// Default test article title.
pub const DEFAULT_TITLE: &str = "Living in the shadow of a great man";

/// Default test article body.
pub const DEFAULT_BODY: &str = "I find this existence challenging";

/// Default test article image URL.
pub const DEFAULT_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Default test article vote count.
pub const DEFAULT_VOTES: i32 = 100;

/// Fixed creation timestamp so fixtures compare equal across calls.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an article entity model with default values.
///
/// # Default Values
/// - article_id: `1`
/// - topic: [`topic::DEFAULT_SLUG`]
/// - author: [`user::DEFAULT_USERNAME`]
/// - votes: `100`
///
/// # Example
///
/// ```rust,ignore
/// let article = fixture::article::entity();
/// assert_eq!(article.votes, 100);
/// ```
pub fn entity() -> article::Model {
    article::Model {
        article_id: 1,
        title: DEFAULT_TITLE.to_string(),
        topic: topic::DEFAULT_SLUG.to_string(),
        author: user::DEFAULT_USERNAME.to_string(),
        body: DEFAULT_BODY.to_string(),
        created_at: default_created_at(),
        votes: DEFAULT_VOTES,
        article_img_url: DEFAULT_IMG_URL.to_string(),
    }
}
