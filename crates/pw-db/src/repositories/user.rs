use crate::{models::User, store::Store};

use super::{filter_all, find_first, same_label};

pub fn find_profile_by_id<'s>(store: &'s Store, user_id: &str) -> Option<&'s User> {
    find_first(store.users(), |u| u.id == user_id)
}

/// Mentors in store order, optionally restricted to one expertise tag ([`same_label`])
pub fn list_mentors<'s>(store: &'s Store, expertise: Option<&str>) -> Vec<&'s User> {
    filter_all(store.users(), |u| {
        u.is_mentor()
            && expertise.is_none_or(|wanted| u.expertise.iter().any(|e| same_label(e, wanted)))
    })
}
