use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::Utc;
use serde::Serialize;

use pw_db::models::PostFilter;
use pw_feed::{
    EnrichedPost, PostSummary, enrich_post, feed,
    present::{CardDisplay, card_display},
};

use crate::{ApiState, error::ApiError, metrics, validation};

/// Create the post routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{post_id}", get(get_post))
}

/// Feed card: the post summary plus display-ready fields
#[derive(Debug, Serialize)]
pub struct FeedItem {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub display: CardDisplay,
}

async fn list_posts(
    State(state): State<ApiState>,
    Query(filter): Query<PostFilter>,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    if let Some(author_id) = &filter.author_id {
        validation::validate_entity_id(author_id)?;
    }

    let now = Utc::now();
    let items = feed(&state.store, &filter)
        .into_iter()
        .map(|summary| FeedItem {
            display: card_display(&summary, now),
            summary,
        })
        .collect();

    Ok(Json(items))
}

async fn get_post(
    State(state): State<ApiState>,
    Path(post_id): Path<String>,
) -> Result<Json<EnrichedPost>, ApiError> {
    validation::validate_entity_id(&post_id)?;

    match enrich_post(&state.store, &post_id) {
        Some(post) => Ok(Json(post)),
        None => {
            metrics::record_not_found("post");
            Err(ApiError::NotFound(format!("Post not found: {post_id}")))
        }
    }
}
