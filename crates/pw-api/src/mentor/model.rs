use serde::{Deserialize, Serialize};
use validator::Validate;

use pw_db::models::User;
use pw_feed::present::Avatar;

/// Body of `POST /mentors/{mentor_id}/connect`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConnectPayload {
    #[validate(length(min = 1, max = 64, message = "from_user_id must be 1 to 64 characters"))]
    pub from_user_id: String,
    #[validate(length(max = 500, message = "message must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Query parameters of `GET /mentors`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorQuery {
    pub expertise: Option<String>,
}

/// Mentor directory entry
#[derive(Debug, Clone, Serialize)]
pub struct MentorCard {
    #[serde(flatten)]
    pub user: User,
    pub avatar: Avatar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_payload_validation() {
        let ok = ConnectPayload {
            from_user_id: "u2".to_string(),
            message: Some("Hi!".to_string()),
        };
        assert!(ok.validate().is_ok());

        let empty_sender = ConnectPayload {
            from_user_id: String::new(),
            message: None,
        };
        assert!(empty_sender.validate().is_err());

        let long_message = ConnectPayload {
            from_user_id: "u2".to_string(),
            message: Some("a".repeat(501)),
        };
        assert!(long_message.validate().is_err());
    }
}
