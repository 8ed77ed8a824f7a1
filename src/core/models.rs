use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news item as published by the wallet core.
///
/// Two record shapes exist upstream: a bare `(time, text, url)` triple and a
/// richer one that also carries a byline and a summary. They are a single
/// type here, with the extra fields optional (absent reads as empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Unix timestamp (seconds) of publication; the primary ordering key.
    ///
    /// Timestamps are not unique: unrelated items may share one, and the
    /// cache keeps such items as a contiguous run.
    pub time: i64,
    /// Body of the item. Opaque to this crate; may contain markup.
    pub text: String,
    /// Link to the full story.
    pub url: String,
    /// Byline, when the feed carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Short summary, when the feed carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewsRecord {
    /// Creates a record in the bare three-field shape.
    pub fn new(time: i64, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
            url: url.into(),
            author: None,
            description: None,
        }
    }

    /// Creates a record in the full five-field shape.
    pub fn with_byline(
        time: i64,
        text: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time,
            text: text.into(),
            url: url.into(),
            author: Some(author.into()),
            description: Some(description.into()),
        }
    }

    /// The publication instant as a UTC datetime.
    ///
    /// A zero timestamp means the item carries no date and yields `None`.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        if self.time == 0 {
            return None;
        }
        DateTime::from_timestamp(self.time, 0)
    }
}

/// What kind of change the core reports for a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeType {
    /// The item was added upstream.
    New,
    /// An existing item changed upstream.
    Updated,
    /// The item was removed upstream.
    Deleted,
}

impl ChangeType {
    /// Maps the core's raw status integer to a change type.
    ///
    /// The discriminants match the core's wire enumeration (`New = 0`,
    /// `Updated = 1`, `Deleted = 2`). Anything else yields `None` and is
    /// dropped at the notification boundary.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::New),
            1 => Some(Self::Updated),
            2 => Some(Self::Deleted),
            _ => None,
        }
    }

    /// The core's wire value for this change type.
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::New => 0,
            Self::Updated => 1,
            Self::Deleted => 2,
        }
    }
}
