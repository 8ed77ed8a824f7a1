//! Tabular facade over the cache, plus the inbound surface the wallet core
//! drives with its change notifications.

mod model;

pub use model::{Cell, Column, Role};

use tracing::debug;

use crate::{
    cache::NewsCache,
    core::{ChangeType, NewsRecord},
    observe::{NullObserver, RangeObserver},
};

/// Table-shaped view of the news cache.
///
/// The model owns the cache and the observer that gets the will/did bracket
/// around every mutation. Records are readable either by [`Column`] or by
/// the matching [`Role`]; both reach the same fields.
///
/// The inbound methods ([`update_news`](Self::update_news),
/// [`refresh`](Self::refresh), [`clear`](Self::clear)) are what the wiring
/// layer calls when the core emits its signals; they are fail-soft, so a
/// misbehaving core can never leave the model inconsistent.
#[derive(Debug)]
pub struct NewsTableModel<O: RangeObserver> {
    cache: NewsCache,
    observer: O,
}

impl NewsTableModel<NullObserver> {
    /// A model nobody observes, for headless use of the table surface.
    pub fn unobserved() -> Self {
        Self::new(NullObserver)
    }
}

impl<O: RangeObserver> NewsTableModel<O> {
    /// Creates an empty model reporting to `observer`.
    pub fn new(observer: O) -> Self {
        Self {
            cache: NewsCache::new(),
            observer,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cache.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        Column::ALL.len()
    }

    /// The record behind `row`, or `None` when out of range.
    pub fn record(&self, row: usize) -> Option<&NewsRecord> {
        self.cache.get(row)
    }

    /// The cell at `row`/`column`, or `None` when the row is out of range.
    pub fn data(&self, row: usize, column: Column) -> Option<Cell<'_>> {
        self.cache
            .get(row)
            .map(|rec| Cell::from_record(rec, column))
    }

    /// The attribute of `row` selected by `role`, or `None` when the row is
    /// out of range. Yields the same value as [`data`](Self::data) for the
    /// corresponding column.
    pub fn role_data(&self, row: usize, role: Role) -> Option<Cell<'_>> {
        self.data(row, role.column())
    }

    /// Header title for `column`.
    pub const fn header(column: Column) -> &'static str {
        column.title()
    }

    /// The underlying cache, for callers that want the raw ordered view.
    pub fn cache(&self) -> &NewsCache {
        &self.cache
    }

    /// The observer this model reports to.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Inbound change notification from the core; one call per change.
    ///
    /// `raw_status` is the core's wire integer. Unknown values are dropped
    /// here, and protocol violations (duplicate insert, delete of an unknown
    /// item) are warned about by the cache and otherwise ignored; the model
    /// keeps serving its current rows either way.
    pub fn update_news(
        &mut self,
        time: i64,
        text: &str,
        url: &str,
        author: Option<&str>,
        description: Option<&str>,
        raw_status: i32,
    ) {
        let Some(status) = ChangeType::from_raw(raw_status) else {
            debug!(raw_status, "ignoring news change with unknown status");
            return;
        };
        let record = NewsRecord {
            time,
            text: text.to_owned(),
            url: url.to_owned(),
            author: author.map(str::to_owned),
            description: description.map(str::to_owned),
        };
        let _ = self.cache.update(record, status, &mut self.observer);
    }

    /// Replaces the whole table from an authoritative feed snapshot.
    pub fn refresh(&mut self, records: Vec<NewsRecord>) {
        self.cache.refresh(records, &mut self.observer);
    }

    /// Empties the table.
    pub fn clear(&mut self) {
        self.cache.clear(&mut self.observer);
    }
}
