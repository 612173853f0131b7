use std::cmp::Reverse;

use crate::{
    models::{Post, PostFilter},
    store::Store,
};

use super::{filter_all, find_first, same_label};

pub fn find_by_id<'s>(store: &'s Store, post_id: &str) -> Option<&'s Post> {
    find_first(store.posts(), |p| p.id == post_id)
}

/// Posts matching `filter`, newest first, ties broken by id
pub fn list<'s>(store: &'s Store, filter: &PostFilter) -> Vec<&'s Post> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut posts = filter_all(store.posts(), |p| {
        matches_filter(p, filter) && search.as_deref().is_none_or(|needle| matches_search(p, needle))
    });
    sort_newest_first(&mut posts);
    posts
}

/// Posts written by `author_id`, newest first
pub fn list_by_author<'s>(store: &'s Store, author_id: &str) -> Vec<&'s Post> {
    let mut posts = filter_all(store.posts(), |p| p.main.author_id == author_id);
    sort_newest_first(&mut posts);
    posts
}

fn sort_newest_first(posts: &mut [&Post]) {
    posts.sort_by(|a, b| {
        Reverse(a.main.created_at)
            .cmp(&Reverse(b.main.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn matches_filter(post: &Post, filter: &PostFilter) -> bool {
    let info = &post.company_info;

    filter
        .company
        .as_deref()
        .is_none_or(|c| same_label(&info.company, c))
        && filter.outcome.is_none_or(|o| info.outcome == o)
        && filter.post_type.is_none_or(|t| post.main.post_type == t)
        && filter
            .author_id
            .as_deref()
            .is_none_or(|a| post.main.author_id == a)
}

fn matches_search(post: &Post, needle: &str) -> bool {
    [
        post.main.title.as_str(),
        post.main.description.as_str(),
        post.company_info.company.as_str(),
        post.company_info.role.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
