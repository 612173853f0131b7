use crate::{models::Resource, store::Store};

use super::filter_all;

pub fn list_by_post_id<'s>(store: &'s Store, post_id: &str) -> Vec<&'s Resource> {
    filter_all(store.resources(), |r| r.post_id == post_id)
}
