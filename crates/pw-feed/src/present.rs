//! Display helpers for derived values: initials, dates, ratings and badges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pw_db::models::{Difficulty, Outcome, PostStats, ResourceType, User};

use crate::enrich::PostSummary;

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

/// Enums that render as a badge
pub trait Badged {
    fn badge(&self) -> Badge;
}

impl Badged for Outcome {
    fn badge(&self) -> Badge {
        match self {
            Self::Selected => Badge {
                label: "Selected",
                tone: Tone::Success,
            },
            Self::Rejected => Badge {
                label: "Rejected",
                tone: Tone::Danger,
            },
            Self::Pending => Badge {
                label: "Pending",
                tone: Tone::Warning,
            },
        }
    }
}

impl Badged for Difficulty {
    fn badge(&self) -> Badge {
        match self {
            Self::Easy => Badge {
                label: "Easy",
                tone: Tone::Success,
            },
            Self::Medium => Badge {
                label: "Medium",
                tone: Tone::Warning,
            },
            Self::Hard => Badge {
                label: "Hard",
                tone: Tone::Danger,
            },
        }
    }
}

impl Badged for ResourceType {
    fn badge(&self) -> Badge {
        let label = match self {
            Self::Pdf => "PDF",
            Self::Video => "Video",
            Self::Link => "Link",
        };
        Badge {
            label,
            tone: Tone::Info,
        }
    }
}

/// Up to two initials: first letters of the first and last words, uppercased.
///
/// # Examples
/// ```
/// use pw_feed::present::initials;
///
/// assert_eq!(initials("Aarav Sharma"), "AS");
/// assert_eq!(initials("  "), "?");
/// ```
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return "?".to_string();
    };

    let mut out: String = first.chars().take(1).flat_map(char::to_uppercase).collect();
    if let Some(last) = words.last() {
        out.extend(last.chars().take(1).flat_map(char::to_uppercase));
    }
    out
}

/// Absolute date, e.g. `Mar 5, 2024`
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Coarse age of `ts` relative to `now`, e.g. `3 days ago`.
/// Timestamps in the future read as `just now`.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts);

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 30 {
        ago(days, "day")
    } else if days < 365 {
        ago(days / 30, "month")
    } else {
        ago(days / 365, "year")
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Rating with one decimal, `None` when the post has no ratings yet
pub fn format_rating(stats: &PostStats) -> Option<String> {
    (stats.rating_count > 0).then(|| format!("{:.1}", stats.avg_rating))
}

/// What to draw in a user's avatar slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Avatar {
    Image(String),
    Initials(String),
}

pub fn avatar(user: &User) -> Avatar {
    match user.personal.avatar.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Avatar::Image(url.to_string()),
        _ => Avatar::Initials(initials(&user.personal.name)),
    }
}

/// Display-ready fields for a feed card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDisplay {
    pub avatar: Avatar,
    pub posted_on: String,
    pub posted_ago: String,
    pub outcome: Badge,
    /// Absent when the post has no stats or no ratings
    pub rating: Option<String>,
}

pub fn card_display(summary: &PostSummary, now: DateTime<Utc>) -> CardDisplay {
    let created_at = summary.post.main.created_at;
    CardDisplay {
        avatar: avatar(&summary.author),
        posted_on: format_date(created_at),
        posted_ago: relative_time(created_at, now),
        outcome: summary.post.company_info.outcome.badge(),
        rating: summary.stats.as_ref().and_then(format_rating),
    }
}
