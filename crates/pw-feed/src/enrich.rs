//! Read-side joins over the entity stores.
//!
//! A post is only renderable together with its author. Every other relation is
//! optional: missing stats become `None` and missing children become empty lists.

use serde::{Deserialize, Serialize};

use pw_db::{
    Store,
    models::{Comment, Post, PostFilter, PostStats, Question, Resource, User},
    repositories::{comment, post, question, resource, stats, user},
};

/// A comment with its author, when the author still resolves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedComment {
    pub comment: Comment,
    pub author: Option<User>,
}

/// Everything the detail page shows for one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedPost {
    pub post: Post,
    pub author: User,
    pub stats: Option<PostStats>,
    pub questions: Vec<Question>,
    pub resources: Vec<Resource>,
    /// Oldest first
    pub comments: Vec<EnrichedComment>,
}

/// Feed card: a post with its author and stats only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub post: Post,
    pub author: User,
    pub stats: Option<PostStats>,
}

/// Join `post` with all of its relations.
///
/// Returns `None` when the author does not resolve.
pub fn enrich(store: &Store, post: &Post) -> Option<EnrichedPost> {
    let Some(author) = user::find_profile_by_id(store, &post.main.author_id) else {
        tracing::warn!(
            post_id = %post.id,
            author_id = %post.main.author_id,
            "Post author does not resolve, post is not renderable"
        );
        return None;
    };

    let comments = comment::list_by_post_id(store, &post.id)
        .into_iter()
        .map(|c| EnrichedComment {
            comment: c.clone(),
            author: user::find_profile_by_id(store, &c.author_id).cloned(),
        })
        .collect();

    Some(EnrichedPost {
        post: post.clone(),
        author: author.clone(),
        stats: stats::find_by_post_id(store, &post.id).cloned(),
        questions: question::list_by_post_id(store, &post.id)
            .into_iter()
            .cloned()
            .collect(),
        resources: resource::list_by_post_id(store, &post.id)
            .into_iter()
            .cloned()
            .collect(),
        comments,
    })
}

/// Look up a post by id and join it with all of its relations.
///
/// `None` covers both an unknown id and a post whose author does not resolve.
pub fn enrich_post(store: &Store, post_id: &str) -> Option<EnrichedPost> {
    let Some(post) = post::find_by_id(store, post_id) else {
        tracing::debug!(%post_id, "Post not found");
        return None;
    };
    enrich(store, post)
}

/// Join `post` with its author and stats.
pub fn summarize(store: &Store, post: &Post) -> Option<PostSummary> {
    let author = user::find_profile_by_id(store, &post.main.author_id)?;
    Some(PostSummary {
        post: post.clone(),
        author: author.clone(),
        stats: stats::find_by_post_id(store, &post.id).cloned(),
    })
}

/// Summaries for `posts`, in input order.
///
/// Posts whose author does not resolve are left out rather than shown without one.
pub fn enrich_post_list<'p>(
    store: &Store,
    posts: impl IntoIterator<Item = &'p Post>,
) -> Vec<PostSummary> {
    posts
        .into_iter()
        .filter_map(|p| {
            let summary = summarize(store, p);
            if summary.is_none() {
                tracing::warn!(post_id = %p.id, "Dropping post with unresolved author from list");
            }
            summary
        })
        .collect()
}

/// The post feed: filtered, newest first, summarized.
pub fn feed(store: &Store, filter: &PostFilter) -> Vec<PostSummary> {
    enrich_post_list(store, post::list(store, filter))
}
