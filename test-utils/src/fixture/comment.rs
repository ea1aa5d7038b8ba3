//! Comment fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::comment;

use crate::fixture::user;

/// Default test comment body.
pub const DEFAULT_BODY: &str = "Oh, I've got compassion running out of my nose, pal!";

/// Default test comment vote count.
pub const DEFAULT_VOTES: i32 = 16;

/// Fixed creation timestamp so fixtures compare equal across calls.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 4, 6, 12, 17, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a comment entity model on article `1` with default values.
pub fn entity() -> comment::Model {
    comment::Model {
        comment_id: 1,
        article_id: 1,
        author: user::DEFAULT_USERNAME.to_string(),
        body: DEFAULT_BODY.to_string(),
        created_at: default_created_at(),
        votes: DEFAULT_VOTES,
    }
}
