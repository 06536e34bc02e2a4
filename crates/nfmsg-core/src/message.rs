//! # Message Record
//!
//! A message is an immutable record of who said what, and when. Ids are the
//! hyphenated string form of a random UUID v4; timestamps are RFC 3339 with
//! second precision in UTC (e.g. `2026-01-15T12:00:00Z`).

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::ValidationError;

/// A posted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: String,
    content: String,
    author: String,
    time: String,
}

impl Message {
    /// Create a new message with a fresh id and the current time.
    ///
    /// Fails if `content` or `author` is empty.
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        let author = author.into();
        validate_fields(&content, &author)?;
        Ok(Self::stamped(content, author))
    }

    /// Assign a fresh id and timestamp to already-validated fields.
    pub(crate) fn stamped(content: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            author,
            time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Assemble a message from already-known parts.
    ///
    /// Used to seed a store with fixture data. The id and time are taken
    /// verbatim and are not checked for UUID or RFC 3339 format.
    pub fn from_parts(
        id: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author: author.into(),
            time: time.into(),
        }
    }

    /// The message id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The message body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Who posted the message.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Creation time as an RFC 3339 string.
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Check the required fields of a new message.
pub fn validate_fields(content: &str, author: &str) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if author.is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }
    Ok(())
}
