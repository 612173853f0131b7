//! Mentor connection requests.
//!
//! This is the only write path in the crate. It is kept apart from the entity stores:
//! the [`ConnectionBook`] only reads the [`Store`] to validate the two users involved.

use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    models::{ConnectionRequest, ConnectionStatus, NewConnectionRequest},
    store::Store,
};

use super::user;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("User not found: {0}")]
    UnknownUser(String),
    #[error("User {0} is not a mentor")]
    NotAMentor(String),
    #[error("Cannot connect with yourself")]
    SelfConnection,
    #[error("A connection request to {0} is already pending")]
    AlreadyRequested(String),
}

/// Pending connection requests, shared between request handlers
#[derive(Debug, Default)]
pub struct ConnectionBook {
    requests: RwLock<Vec<ConnectionRequest>>,
}

impl ConnectionBook {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Record a request from `new.from_user_id` to the mentor `new.mentor_id`.
pub fn request_connection(
    book: &ConnectionBook,
    store: &Store,
    new: NewConnectionRequest,
) -> Result<ConnectionRequest, ConnectionError> {
    if new.from_user_id == new.mentor_id {
        return Err(ConnectionError::SelfConnection);
    }

    if user::find_profile_by_id(store, &new.from_user_id).is_none() {
        return Err(ConnectionError::UnknownUser(new.from_user_id));
    }

    match user::find_profile_by_id(store, &new.mentor_id) {
        None => return Err(ConnectionError::UnknownUser(new.mentor_id)),
        Some(mentor) if !mentor.is_mentor() => {
            return Err(ConnectionError::NotAMentor(new.mentor_id));
        }
        Some(_) => {}
    }

    // The duplicate check and the insert happen under one write lock
    let mut requests = book.requests.write().unwrap_or_else(PoisonError::into_inner);

    if requests
        .iter()
        .any(|r| r.from_user_id == new.from_user_id && r.mentor_id == new.mentor_id)
    {
        return Err(ConnectionError::AlreadyRequested(new.mentor_id));
    }

    let request = ConnectionRequest {
        id: Uuid::new_v4(),
        from_user_id: new.from_user_id,
        mentor_id: new.mentor_id,
        message: new.message.filter(|m| !m.trim().is_empty()),
        status: ConnectionStatus::Pending,
        created_at: Utc::now(),
    };
    requests.push(request.clone());

    tracing::info!(
        request_id = %request.id,
        from = %request.from_user_id,
        mentor = %request.mentor_id,
        "Connection request recorded"
    );

    Ok(request)
}

/// Requests addressed to `mentor_id`, oldest first
pub fn list_for_mentor(book: &ConnectionBook, mentor_id: &str) -> Vec<ConnectionRequest> {
    book.requests
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .filter(|r| r.mentor_id == mentor_id)
        .cloned()
        .collect()
}
