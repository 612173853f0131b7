//! In-memory entity stores.
//!
//! A [`Store`] is a set of flat, normalized tables. It is built once at process start
//! and then shared read-only; every lookup in [`crate::repositories`] takes it by
//! reference.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Comment, Post, PostStats, Question, Resource, User};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },
    #[error("More than one stats record for post {0}")]
    DuplicateStats(String),
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid seed file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw table contents, as found in a JSON seed file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreTables {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub stats: Vec<PostStats>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Validated, read-only entity stores
#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    stats: Vec<PostStats>,
    questions: Vec<Question>,
    resources: Vec<Resource>,
    comments: Vec<Comment>,
}

impl Store {
    /// Build a store, rejecting duplicate ids and duplicate stats records.
    ///
    /// Dangling references (a post whose author does not exist, a comment on an unknown
    /// post) are accepted here; the joins decide how to treat them.
    pub fn new(tables: StoreTables) -> Result<Self, StoreError> {
        ensure_unique("user", tables.users.iter().map(|u| u.id.as_str()))?;
        ensure_unique("post", tables.posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique("question", tables.questions.iter().map(|q| q.id.as_str()))?;
        ensure_unique("resource", tables.resources.iter().map(|r| r.id.as_str()))?;
        ensure_unique("comment", tables.comments.iter().map(|c| c.id.as_str()))?;

        let mut seen = HashSet::new();
        for stats in &tables.stats {
            if !seen.insert(stats.post_id.as_str()) {
                return Err(StoreError::DuplicateStats(stats.post_id.clone()));
            }
        }

        tracing::debug!(
            users = tables.users.len(),
            posts = tables.posts.len(),
            questions = tables.questions.len(),
            "Store built"
        );

        Ok(Self {
            users: tables.users,
            posts: tables.posts,
            stats: tables.stats,
            questions: tables.questions,
            resources: tables.resources,
            comments: tables.comments,
        })
    }

    /// Store populated with the built-in sample data
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(crate::seed::tables())
    }

    /// Load tables from a JSON file shaped like [`StoreTables`]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let tables: StoreTables = serde_json::from_str(&raw)?;
        Self::new(tables)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn stats(&self) -> &[PostStats] {
        &self.stats
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

fn ensure_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
