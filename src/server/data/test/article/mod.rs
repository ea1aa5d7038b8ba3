use crate::server::{
    data::article::ArticleRepository,
    model::article::{
        ArticleSortColumn, CreateArticleParams, ListArticlesParams, SortOrder,
        DEFAULT_ARTICLE_IMG_URL,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, seed};

mod create;
mod delete;
mod find_by_id;
mod get_all;
mod increment_votes;
