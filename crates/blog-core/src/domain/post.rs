use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::DateKey;
use crate::error::DomainError;

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Timestamps arrive as free-form strings; anything that is not RFC 3339 is dropped.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|ts| ts.with_timezone(&Utc)))
}

/// Post entity - a blog post keyed by its publication date.
///
/// Date parts left at `0` are treated as unset, and are omitted from JSON
/// output the same way absent timestamps are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub day: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub month: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: u32,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create an undated post.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, year: u32, month: u32, day: u32) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    /// The post's date key, if every part is set.
    pub fn date_key(&self) -> Option<DateKey> {
        DateKey::new(self.year, self.month, self.day)
    }

    /// Whether any date part is set.
    pub fn has_date(&self) -> bool {
        self.year != 0 || self.month != 0 || self.day != 0
    }

    /// Stamp the post for creation at `now`.
    ///
    /// Both timestamps are set to `now` at second precision. An entirely
    /// unset date is taken from `now`'s calendar fields; a partially set date
    /// is kept as given.
    pub fn stamp(&mut self, now: DateTime<Utc>) -> Result<(), DomainError> {
        let now = now.trunc_subsecs(0);
        self.created_at = Some(now);
        self.updated_at = Some(now);

        if !self.has_date() {
            self.year = u32::try_from(now.year())
                .map_err(|_| DomainError::InvalidDate(format!("year {} is out of range", now.year())))?;
            self.month = now.month();
            self.day = now.day();
        }

        Ok(())
    }
}

/// The mutable part of a post - everything but its date key and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEdit {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl PostEdit {
    /// Take the editable fields of `post`, stamped at `now`.
    pub fn from_post(post: Post, now: DateTime<Utc>) -> Self {
        Self {
            title: post.title,
            content: post.content,
            updated_at: now.trunc_subsecs(0),
        }
    }
}
