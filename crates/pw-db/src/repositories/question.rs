use crate::{models::Question, store::Store};

use super::filter_all;

pub fn list_by_post_id<'s>(store: &'s Store, post_id: &str) -> Vec<&'s Question> {
    filter_all(store.questions(), |q| q.post_id == post_id)
}

/// Every question, in store order
pub fn list_all(store: &Store) -> Vec<&Question> {
    store.questions().iter().collect()
}
