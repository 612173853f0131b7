use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pw_db::repositories::connection::ConnectionError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "Request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ConnectionError> for ApiError {
    fn from(err: ConnectionError) -> Self {
        match err {
            ConnectionError::UnknownUser(_) => Self::NotFound(err.to_string()),
            ConnectionError::NotAMentor(_) | ConnectionError::SelfConnection => {
                Self::Validation(err.to_string())
            }
            ConnectionError::AlreadyRequested(_) => Self::Conflict(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_mapping() {
        let cases = [
            (ConnectionError::UnknownUser("x".into()), StatusCode::NOT_FOUND),
            (ConnectionError::NotAMentor("x".into()), StatusCode::BAD_REQUEST),
            (ConnectionError::SelfConnection, StatusCode::BAD_REQUEST),
            (ConnectionError::AlreadyRequested("x".into()), StatusCode::CONFLICT),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound("Post not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
