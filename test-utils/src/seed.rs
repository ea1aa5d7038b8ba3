//! Canonical dataset shared by repository, service, and HTTP tests.
//!
//! Rows are inserted in a fixed order into empty tables, so auto-assigned ids are
//! stable: articles are numbered 1 to [`ARTICLE_COUNT`] and comments 1 to
//! [`COMMENT_COUNT`] in the order they appear below.
//!
//! | article | topic | author        | votes | comments |
//! |---------|-------|---------------|-------|----------|
//! | 1       | mitch | butter_bridge | 100   | 1, 2, 3, 4 |
//! | 2       | mitch | icellusedkars | 0     | none     |
//! | 3       | mitch | icellusedkars | 0     | 5, 6     |
//! | 4       | mitch | rogersop      | 0     | none     |
//! | 5       | cats  | rogersop      | 0     | 7, 8     |
//! | 6       | mitch | icellusedkars | 0     | none     |
//! | 7       | mitch | icellusedkars | 0     | none     |
//!
//! Topic `paper` has no articles and user `lurker` has written nothing.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    article::ArticleFactory, comment::CommentFactory, topic::TopicFactory, user::UserFactory,
};

pub const TOPIC_COUNT: usize = 3;
pub const USER_COUNT: usize = 4;
pub const ARTICLE_COUNT: usize = 7;
pub const COMMENT_COUNT: usize = 8;

/// Number of seeded articles filed under the `mitch` topic.
pub const MITCH_ARTICLE_COUNT: usize = 6;

/// Comment count of each seeded article, indexed by `article_id - 1`.
pub const COMMENT_COUNTS: [i64; ARTICLE_COUNT] = [4, 0, 2, 0, 2, 0, 0];

const TOPICS: [(&str, &str); TOPIC_COUNT] = [
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

const USERS: [(&str, &str, &str); USER_COUNT] = [
    (
        "butter_bridge",
        "jonny",
        "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
    ),
    (
        "icellusedkars",
        "sam",
        "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
    ),
    (
        "rogersop",
        "paul",
        "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
    ),
    (
        "lurker",
        "do_nothing",
        "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
    ),
];

struct SeedArticle {
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: (i32, u32, u32, u32, u32),
    votes: i32,
}

const ARTICLES: [SeedArticle; ARTICLE_COUNT] = [
    SeedArticle {
        title: "Living in the shadow of a great man",
        topic: "mitch",
        author: "butter_bridge",
        body: "I find this existence challenging",
        created_at: (2020, 7, 9, 20, 11),
        votes: 100,
    },
    SeedArticle {
        title: "Sony Vaio; or, The Laptop",
        topic: "mitch",
        author: "icellusedkars",
        body: "Call me Mitchell. Some years ago I decided to buy a laptop.",
        created_at: (2020, 10, 16, 5, 3),
        votes: 0,
    },
    SeedArticle {
        title: "Eight pug gifs that remind me of mitch",
        topic: "mitch",
        author: "icellusedkars",
        body: "some gifs",
        created_at: (2020, 11, 3, 9, 12),
        votes: 0,
    },
    SeedArticle {
        title: "Student SUES Mitch!",
        topic: "mitch",
        author: "rogersop",
        body: "We all love Mitch and his wonderful, unique typing style.",
        created_at: (2020, 5, 6, 1, 14),
        votes: 0,
    },
    SeedArticle {
        title: "UNCOVERED: catspiracy to bring down democracy",
        topic: "cats",
        author: "rogersop",
        body: "Bastet walks amongst us, and the cats are taking arms!",
        created_at: (2020, 8, 3, 13, 14),
        votes: 0,
    },
    SeedArticle {
        title: "A",
        topic: "mitch",
        author: "icellusedkars",
        body: "Delicious tin of cat food",
        created_at: (2020, 10, 18, 1, 0),
        votes: 0,
    },
    SeedArticle {
        title: "Z",
        topic: "mitch",
        author: "icellusedkars",
        body: "I was hungry.",
        created_at: (2020, 1, 7, 14, 8),
        votes: 0,
    },
];

struct SeedComment {
    article_id: i32,
    author: &'static str,
    body: &'static str,
    created_at: (i32, u32, u32, u32, u32),
    votes: i32,
}

const COMMENTS: [SeedComment; COMMENT_COUNT] = [
    SeedComment {
        article_id: 1,
        author: "butter_bridge",
        body: "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
        created_at: (2020, 4, 6, 12, 17),
        votes: 16,
    },
    SeedComment {
        article_id: 1,
        author: "butter_bridge",
        body: "The beautiful thing about treasure is that it exists.",
        created_at: (2020, 10, 31, 3, 3),
        votes: 14,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide.",
        created_at: (2020, 3, 1, 1, 13),
        votes: 100,
    },
    SeedComment {
        article_id: 1,
        author: "icellusedkars",
        body: "I carry a log. Yes. Is it funny to you? It is not to me.",
        created_at: (2020, 2, 23, 12, 1),
        votes: -100,
    },
    SeedComment {
        article_id: 3,
        author: "icellusedkars",
        body: "Ambidextrous marsupial",
        created_at: (2020, 9, 19, 23, 10),
        votes: 0,
    },
    SeedComment {
        article_id: 3,
        author: "butter_bridge",
        body: "git push origin master",
        created_at: (2020, 6, 20, 7, 24),
        votes: 0,
    },
    SeedComment {
        article_id: 5,
        author: "rogersop",
        body: "What do you see? I have no idea where this will lead us.",
        created_at: (2020, 6, 9, 5, 0),
        votes: 16,
    },
    SeedComment {
        article_id: 5,
        author: "icellusedkars",
        body: "I am 100% sure that we're not completely sure.",
        created_at: (2020, 11, 24, 0, 8),
        votes: 1,
    },
];

fn timestamp((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Inserts the canonical topics, users, articles, and comments.
///
/// The four news tables must exist and be empty.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - Every row inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_news_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (slug, description) in TOPICS {
        TopicFactory::new(db)
            .slug(slug)
            .description(description)
            .build()
            .await?;
    }

    for (username, name, avatar_url) in USERS {
        UserFactory::new(db)
            .username(username)
            .name(name)
            .avatar_url(avatar_url)
            .build()
            .await?;
    }

    for article in ARTICLES {
        ArticleFactory::new(db, article.topic, article.author)
            .title(article.title)
            .body(article.body)
            .created_at(timestamp(article.created_at))
            .votes(article.votes)
            .build()
            .await?;
    }

    for comment in COMMENTS {
        CommentFactory::new(db, comment.article_id, comment.author)
            .body(comment.body)
            .created_at(timestamp(comment.created_at))
            .votes(comment.votes)
            .build()
            .await?;
    }

    Ok(())
}
