use crate::{models::PostStats, store::Store};

use super::find_first;

pub fn find_by_post_id<'s>(store: &'s Store, post_id: &str) -> Option<&'s PostStats> {
    find_first(store.stats(), |s| s.post_id == post_id)
}
