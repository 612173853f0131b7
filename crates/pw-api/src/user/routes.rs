use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use pw_feed::{UserProfile, user_profile};

use crate::{ApiState, error::ApiError, metrics, validation};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/users/{user_id}", get(get_user_profile))
}

/// Profile page: the user, their posts and engagement totals
async fn get_user_profile(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    validation::validate_entity_id(&user_id)?;

    user_profile(&state.store, &user_id).map(Json).ok_or_else(|| {
        metrics::record_not_found("user");
        ApiError::NotFound(format!("User not found: {user_id}"))
    })
}
