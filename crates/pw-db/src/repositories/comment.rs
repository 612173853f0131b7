use crate::{models::Comment, store::Store};

use super::filter_all;

/// Comments on a post, oldest first
///
/// The sort is stable, so comments sharing a timestamp keep store order.
pub fn list_by_post_id<'s>(store: &'s Store, post_id: &str) -> Vec<&'s Comment> {
    let mut comments = filter_all(store.comments(), |c| c.post_id == post_id);
    comments.sort_by_key(|c| c.created_at);
    comments
}
