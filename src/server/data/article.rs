//! Article data repository for database operations.
//!
//! Every article returned from here carries its comment count. Listings compute all
//! counts in one grouped query and join them in memory, so a listing costs two queries
//! regardless of its length.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{votes_plus, votes_stay_in_range},
    model::article::{Article, CreateArticleParams, ListArticlesParams},
};

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an article by id together with its comment count.
    ///
    /// # Arguments
    /// - `article_id` - Article primary key
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error during either query
    pub async fn find_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let Some(article) = entity::prelude::Article::find_by_id(article_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let comment_count = self.count_comments(article_id).await?;

        Ok(Some(Article::from_entity(article, comment_count)))
    }

    /// Checks whether an article exists without loading it.
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(article_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all articles matching the listing parameters.
    ///
    /// Ties on the sort column are broken by ascending `article_id` so repeated
    /// listings return the same order.
    ///
    /// # Arguments
    /// - `params` - Validated sort column, direction, and optional topic filter
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Matching articles with comment counts
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_all(&self, params: &ListArticlesParams) -> Result<Vec<Article>, DbErr> {
        let mut query = entity::prelude::Article::find();

        if let Some(topic) = &params.topic {
            query = query.filter(entity::article::Column::Topic.eq(topic.as_str()));
        }

        let articles = query
            .order_by(params.sort_by.column(), params.order.order())
            .order_by(entity::article::Column::ArticleId, Order::Asc)
            .all(self.db)
            .await?;

        let article_ids: Vec<i32> = articles.iter().map(|a| a.article_id).collect();
        let comment_counts = self.comment_counts(article_ids).await?;

        Ok(articles
            .into_iter()
            .map(|article| {
                let count = comment_counts
                    .get(&article.article_id)
                    .copied()
                    .unwrap_or(0);
                Article::from_entity(article, count)
            })
            .collect())
    }

    /// Inserts an article with zero votes, timestamped now.
    ///
    /// # Returns
    /// - `Ok(Article)` - The inserted article with a comment count of zero
    /// - `Err(DbErr)` - Database error, including foreign key violations for an unknown
    ///   topic or author
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, DbErr> {
        let article = entity::article::ActiveModel {
            title: ActiveValue::Set(params.title),
            topic: ActiveValue::Set(params.topic),
            author: ActiveValue::Set(params.author),
            body: ActiveValue::Set(params.body),
            created_at: ActiveValue::Set(Utc::now()),
            votes: ActiveValue::Set(0),
            article_img_url: ActiveValue::Set(params.article_img_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(article, 0))
    }

    /// Adds `inc_votes` to an article's vote count in a single UPDATE.
    ///
    /// The result may be negative. The UPDATE only matches when the new count still
    /// fits in `i32`; otherwise the row is left unchanged.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The article after the update, with its comment count
    /// - `Ok(None)` - No article with that id, or the new count would overflow
    /// - `Err(DbErr)` - Database error during update or re-read
    pub async fn increment_votes(
        &self,
        article_id: i32,
        inc_votes: i32,
    ) -> Result<Option<Article>, DbErr> {
        let result = entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::Votes,
                votes_plus(entity::article::Column::Votes, inc_votes),
            )
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .filter(votes_stay_in_range(entity::article::Column::Votes, inc_votes))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(article_id).await
    }

    /// Deletes an article by id. Its comments are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - The article was deleted
    /// - `Ok(false)` - No article with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, article_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Article::delete_by_id(article_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn count_comments(&self, article_id: i32) -> Result<i64, DbErr> {
        let count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await?;

        Ok(count as i64)
    }

    /// Comment counts for the given articles, keyed by article id. Articles without
    /// comments are absent.
    async fn comment_counts(&self, article_ids: Vec<i32>) -> Result<HashMap<i32, i64>, DbErr> {
        if article_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.is_in(article_ids))
            .select_only()
            .column(entity::comment::Column::ArticleId)
            .column_as(entity::comment::Column::CommentId.count(), "comment_count")
            .group_by(entity::comment::Column::ArticleId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts.into_iter().collect())
    }
}
