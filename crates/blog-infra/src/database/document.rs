//! Storage representation of posts in the document store.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use blog_core::domain::{DateKey, Post, PostEdit, PostFilter};
use blog_core::error::RepoError;

/// A post as stored: date parts as 64-bit integers, timestamps as RFC 3339 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub day: i64,
    #[serde(default)]
    pub month: i64,
    #[serde(default)]
    pub year: i64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn parse_timestamp(raw: &str) -> Result<Option<DateTime<Utc>>, RepoError> {
    if raw.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| Some(ts.with_timezone(&Utc)))
        .map_err(|e| RepoError::Query(format!("invalid stored timestamp {raw:?}: {e}")))
}

fn date_part(name: &str, value: i64) -> Result<u32, RepoError> {
    u32::try_from(value)
        .map_err(|_| RepoError::Query(format!("invalid stored {name}: {value}")))
}

/// Conversion from a stored document to the domain post.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(document: PostDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            title: document.title,
            content: document.content,
            day: date_part("day", document.day)?,
            month: date_part("month", document.month)?,
            year: date_part("year", document.year)?,
            created_at: parse_timestamp(&document.created_at)?,
            updated_at: parse_timestamp(&document.updated_at)?,
        })
    }
}

/// Conversion from the domain post to its stored document.
impl From<Post> for PostDocument {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            content: post.content,
            day: i64::from(post.day),
            month: i64::from(post.month),
            year: i64::from(post.year),
            created_at: post.created_at.map(format_timestamp).unwrap_or_default(),
            updated_at: post.updated_at.map(format_timestamp).unwrap_or_default(),
        }
    }
}

/// Query document holding only the fields the filter constrains.
pub fn filter_document(filter: &PostFilter) -> Document {
    let mut document = Document::new();
    if let Some(year) = filter.year {
        document.insert("year", i64::from(year));
    }
    if let Some(month) = filter.month {
        document.insert("month", i64::from(month));
    }
    if let Some(day) = filter.day {
        document.insert("day", i64::from(day));
    }
    document
}

/// Exact match on a date key.
pub fn key_document(key: &DateKey) -> Document {
    doc! {
        "year": i64::from(key.year()),
        "month": i64::from(key.month()),
        "day": i64::from(key.day()),
    }
}

/// `$set` update for the editable fields.
pub fn edit_document(edit: PostEdit) -> Document {
    doc! {
        "$set": {
            "title": edit.title,
            "content": edit.content,
            "updatedAt": format_timestamp(edit.updated_at),
        }
    }
}
