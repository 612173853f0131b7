use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use pw_db::{
    models::{ConnectionRequest, NewConnectionRequest},
    repositories::{connection, user},
};
use pw_feed::present::avatar;

use super::model::{ConnectPayload, MentorCard, MentorQuery};
use crate::{
    ApiState, error::ApiError, metrics, middleware::rate_limit::apply_write_rate_limit, validation,
};

/// Create the mentor routes
pub fn routes() -> Router<ApiState> {
    let writes = apply_write_rate_limit(
        Router::new().route("/mentors/{mentor_id}/connect", post(request_connection)),
    );

    Router::new()
        .route("/mentors", get(list_mentors))
        .route("/mentors/{mentor_id}/requests", get(list_requests))
        .merge(writes)
}

async fn list_mentors(
    State(state): State<ApiState>,
    Query(query): Query<MentorQuery>,
) -> Json<Vec<MentorCard>> {
    let expertise = query
        .expertise
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let mentors = user::list_mentors(&state.store, expertise)
        .into_iter()
        .map(|u| MentorCard {
            avatar: avatar(u),
            user: u.clone(),
        })
        .collect();

    Json(mentors)
}

/// Ask a mentor to connect
///
/// This is a write: it records a pending request and returns it, or explains why it
/// was refused. It does not touch the entity stores.
async fn request_connection(
    State(state): State<ApiState>,
    Path(mentor_id): Path<String>,
    Json(payload): Json<ConnectPayload>,
) -> Result<(StatusCode, Json<ConnectionRequest>), ApiError> {
    validation::validate_entity_id(&mentor_id)?;
    payload.validate()?;
    validation::validate_entity_id(&payload.from_user_id)?;

    let result = connection::request_connection(
        &state.connections,
        &state.store,
        NewConnectionRequest {
            from_user_id: payload.from_user_id,
            mentor_id,
            message: payload.message,
        },
    );
    metrics::record_connection_request(result.is_ok());

    let request = result?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Pending requests addressed to a mentor
async fn list_requests(
    State(state): State<ApiState>,
    Path(mentor_id): Path<String>,
) -> Result<Json<Vec<ConnectionRequest>>, ApiError> {
    validation::validate_entity_id(&mentor_id)?;

    match user::find_profile_by_id(&state.store, &mentor_id) {
        Some(mentor) if mentor.is_mentor() => Ok(Json(connection::list_for_mentor(
            &state.connections,
            &mentor_id,
        ))),
        Some(_) => Err(ApiError::Validation(format!(
            "User {mentor_id} is not a mentor"
        ))),
        None => {
            metrics::record_not_found("user");
            Err(ApiError::NotFound(format!("User not found: {mentor_id}")))
        }
    }
}
