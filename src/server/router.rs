use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{EndpointsDto, ErrorDto, VoteDto},
        article::{
            AllArticlesDto, ArticleDto, ArticleListItemDto, ChosenArticleDto, CreateArticleDto,
            PostedArticleDto, UpdatedArticleDto,
        },
        comment::{
            AllArticleCommentsDto, CommentDto, CreateCommentDto, UpdatedCommentDto,
            UserCommentDto,
        },
        topic::{AllTopicsDto, CreateTopicDto, PostedTopicDto, TopicDto},
        user::{AllUsersDto, SpecifiedUserDto, UserDto},
    },
    server::{
        controller::{
            api::{self, get_endpoints, get_openapi, route_not_found},
            article::{self, create_article, delete_article, get_article, get_articles, vote_article},
            comment::{
                self, create_comment, delete_comment, get_article_comments, vote_comment,
            },
            topic::{self, create_topic, get_topics},
            user::{self, get_user, get_users},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Newsboard API", description = "Topics, articles, comments, and users"),
    paths(
        api::get_endpoints,
        api::get_openapi,
        topic::get_topics,
        topic::create_topic,
        article::get_articles,
        article::create_article,
        article::get_article,
        article::vote_article,
        article::delete_article,
        comment::get_article_comments,
        comment::create_comment,
        comment::vote_comment,
        comment::delete_comment,
        user::get_users,
        user::get_user,
    ),
    components(schemas(
        ErrorDto,
        EndpointsDto,
        VoteDto,
        TopicDto,
        CreateTopicDto,
        AllTopicsDto,
        PostedTopicDto,
        ArticleDto,
        ArticleListItemDto,
        CreateArticleDto,
        AllArticlesDto,
        ChosenArticleDto,
        PostedArticleDto,
        UpdatedArticleDto,
        CommentDto,
        CreateCommentDto,
        AllArticleCommentsDto,
        UserCommentDto,
        UpdatedCommentDto,
        UserDto,
        AllUsersDto,
        SpecifiedUserDto,
    )),
    tags(
        (name = api::API_TAG, description = "API documentation"),
        (name = topic::TOPIC_TAG, description = "Topics articles are filed under"),
        (name = article::ARTICLE_TAG, description = "Articles"),
        (name = comment::COMMENT_TAG, description = "Comments on articles"),
        (name = user::USER_TAG, description = "Users"),
    )
)]
pub struct ApiDoc;

/// Routes of the API, without middleware.
///
/// Unmatched paths and unsupported methods on matched paths both answer
/// `404 {"msg": "Route Not Found"}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/openapi.json", get(get_openapi))
        .route("/api/topics", get(get_topics).post(create_topic))
        .route("/api/articles", get(get_articles).post(create_article))
        .route(
            "/api/articles/{article_id}",
            get(get_article).patch(vote_article).delete(delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(get_article_comments).post(create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(vote_comment).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/{username}", get(get_user))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

/// The complete application: routes, state, CORS for any origin, and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
