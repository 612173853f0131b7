use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a user offers mentorship or is looking for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Mentor,
    Learner,
}

/// Personal details shown on profile cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
    /// Avatar image URL, initials are rendered when absent
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Academic background of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Academics {
    pub institution: String,
    pub branch: String,
    pub graduation_year: i32,
}

/// User model - authors posts and comments, mentors when `role` is `Mentor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    pub personal: Personal,
    pub academics: Academics,
    pub role: UserRole,
    /// Topics the user can help with (free-form tags)
    #[serde(default)]
    pub expertise: Vec<String>,
}

impl User {
    pub fn is_mentor(&self) -> bool {
        self.role == UserRole::Mentor
    }
}

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Interview,
    Article,
    Tips,
}

/// How the candidate applied to the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationType {
    OnCampus,
    OffCampus,
    Referral,
    Internship,
}

/// Result of the interview process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Selected,
    Rejected,
    Pending,
}

/// Authored part of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMain {
    /// Weak reference to `User::id`
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub post_type: PostType,
}

/// Company the experience is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company: String,
    pub role: String,
    pub application_type: ApplicationType,
    pub outcome: Outcome,
}

/// Post model - a shared interview experience, article or tips write-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: String,
    pub main: PostMain,
    pub company_info: CompanyInfo,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Precomputed engagement counters for a post (at most one per post)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStats {
    pub post_id: String,
    pub views: u64,
    pub likes: u64,
    /// Mean of all ratings, 0.0 when `rating_count` is 0
    pub avg_rating: f64,
    pub rating_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single interview question asked in the experience described by `post_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub post_id: String,
    pub text: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Video,
    Link,
}

/// External study material attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub post_id: String,
    pub url: String,
    pub resource_type: ResourceType,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    /// Weak reference to `User::id`
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Query filters for the post feed
/// All set fields must match; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFilter {
    /// Case-insensitive company name
    pub company: Option<String>,
    pub outcome: Option<Outcome>,
    pub post_type: Option<PostType>,
    pub author_id: Option<String>,
    /// Case-insensitive substring of title, description, company or role
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
}

/// A learner asking a mentor to connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    pub id: uuid::Uuid,
    pub from_user_id: String,
    pub mentor_id: String,
    pub message: Option<String>,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert struct for `ConnectionRequest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConnectionRequest {
    pub from_user_id: String,
    pub mentor_id: String,
    pub message: Option<String>,
}
