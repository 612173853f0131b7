use serde::{Deserialize, Serialize};

use pw_db::{
    Store,
    models::User,
    repositories::{post, user},
};

use crate::enrich::{PostSummary, enrich_post_list};

/// Engagement totals across a user's posts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileTotals {
    pub post_count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub rating_count: u64,
    /// Mean rating weighted by each post's rating count, `None` when nothing is rated
    pub avg_rating: Option<f64>,
}

/// Profile page: a user with their posts, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: User,
    pub posts: Vec<PostSummary>,
    pub totals: ProfileTotals,
}

/// Build the profile page for `user_id`, `None` when the user does not exist.
pub fn user_profile(store: &Store, user_id: &str) -> Option<UserProfile> {
    let user = user::find_profile_by_id(store, user_id)?;
    let posts = enrich_post_list(store, post::list_by_author(store, user_id));
    let totals = totals(&posts);

    Some(UserProfile {
        user: user.clone(),
        posts,
        totals,
    })
}

fn totals(posts: &[PostSummary]) -> ProfileTotals {
    let mut totals = ProfileTotals {
        post_count: posts.len(),
        ..Default::default()
    };
    let mut rating_sum = 0.0;

    for stats in posts.iter().filter_map(|p| p.stats.as_ref()) {
        totals.total_views += stats.views;
        totals.total_likes += stats.likes;
        totals.rating_count += stats.rating_count;
        rating_sum += stats.avg_rating * stats.rating_count as f64;
    }

    if totals.rating_count > 0 {
        totals.avg_rating = Some(rating_sum / totals.rating_count as f64);
    }
    totals
}
