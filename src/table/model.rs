use chrono::{DateTime, Utc};

use crate::core::NewsRecord;

/// Columns of the news table, in display order.
///
/// Indices are 1-based, matching the enumeration the wallet UI has always
/// used for this table; [`Column::from_index`] returns `None` for `0` and
/// for anything past [`Column::Description`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Publication date.
    Date = 1,
    /// Body of the item.
    Text = 2,
    /// Link to the full story.
    Url = 3,
    /// Byline.
    Author = 4,
    /// Short summary.
    Description = 5,
}

impl Column {
    /// All columns, in display order.
    pub const ALL: [Self; 5] = [
        Self::Date,
        Self::Text,
        Self::Url,
        Self::Author,
        Self::Description,
    ];

    /// The 1-based index of this column.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The column at a 1-based index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Date),
            2 => Some(Self::Text),
            3 => Some(Self::Url),
            4 => Some(Self::Author),
            5 => Some(Self::Description),
            _ => None,
        }
    }

    /// Header title for this column.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Text => "Text",
            Self::Url => "Url",
            Self::Author => "Author",
            Self::Description => "Description",
        }
    }
}

/// Column-independent attribute roles.
///
/// Roles expose the same field set as [`Column`] but without a position, for
/// consumers that read records attribute-style rather than cell-by-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Publication date.
    Date,
    /// Body of the item.
    Text,
    /// Link to the full story.
    Url,
    /// Byline.
    Author,
    /// Short summary.
    Description,
}

impl Role {
    /// All roles, mirroring [`Column::ALL`].
    pub const ALL: [Self; 5] = [
        Self::Date,
        Self::Text,
        Self::Url,
        Self::Author,
        Self::Description,
    ];

    /// The column carrying the same field.
    pub const fn column(self) -> Column {
        match self {
            Self::Date => Column::Date,
            Self::Text => Column::Text,
            Self::Url => Column::Url,
            Self::Author => Column::Author,
            Self::Description => Column::Description,
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// Publication instant; `None` when the record carries no date.
    Date(Option<DateTime<Utc>>),
    /// Text content, borrowed from the record. Absent optional fields read
    /// as the empty string.
    Text(&'a str),
}

impl<'a> Cell<'a> {
    pub(super) fn from_record(rec: &'a NewsRecord, column: Column) -> Self {
        match column {
            Column::Date => Self::Date(rec.published_at()),
            Column::Text => Self::Text(&rec.text),
            Column::Url => Self::Text(&rec.url),
            Column::Author => Self::Text(rec.author.as_deref().unwrap_or_default()),
            Column::Description => Self::Text(rec.description.as_deref().unwrap_or_default()),
        }
    }

    /// The textual content, when this is a text cell.
    pub const fn as_str(self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Date(_) => None,
        }
    }
}
