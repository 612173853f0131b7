//! Read models for the Prepwise platform.
//!
//! This crate assembles display-ready aggregates from the normalized tables in
//! [`pw_db`]: post detail pages, feed cards, the deduplicated question bank and user
//! profiles. Everything here is a pure function of the [`pw_db::Store`] it is given.

pub mod catalog;
pub mod dedup;
pub mod enrich;
pub mod normalization;
pub mod present;
pub mod profile;

pub use catalog::{BankQuestion, CompanyCount, QuestionFilter, companies, question_bank};
pub use dedup::dedupe_by;
pub use enrich::{
    EnrichedComment, EnrichedPost, PostSummary, enrich, enrich_post, enrich_post_list, feed,
};
pub use profile::{ProfileTotals, UserProfile, user_profile};
