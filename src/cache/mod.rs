//! The local news cache and the incremental update algorithm.

use std::cmp::Reverse;

use tracing::warn;

use crate::{
    core::{ChangeType, NewsError, NewsRecord},
    observe::{RangeChange, RangeObserver},
};

/// Local, time-ordered mirror of the core's news feed.
///
/// Records are kept sorted non-increasing by [`NewsRecord::time`] (newest
/// first) at all times. Items sharing a timestamp form a contiguous run.
/// Every structural mutation is announced to a [`RangeObserver`] with the
/// exact affected row range, bracketed before and after the mutation.
///
/// The cache is single-threaded by construction: mutation goes through
/// `&mut self`, and the caller that drains change notifications from the
/// core is expected to be the one thread invoking it.
#[derive(Debug, Clone, Default)]
pub struct NewsCache {
    records: Vec<NewsRecord>,
}

impl NewsCache {
    /// Creates an empty cache.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, newest first. `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&NewsRecord> {
        self.records.get(index)
    }

    /// Iterates the records newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &NewsRecord> {
        self.records.iter()
    }

    /// First index whose record is not newer than `time`.
    ///
    /// This is the position where an item with that timestamp can be
    /// inserted without breaking the newest-first order, and the start of
    /// the equal-time run when one exists.
    pub fn lower_bound(&self, time: i64) -> usize {
        self.records.partition_point(|rec| rec.time > time)
    }

    /// First index whose record is strictly older than `time`, i.e. one past
    /// the end of the equal-time run.
    pub fn upper_bound(&self, time: i64) -> usize {
        self.records.partition_point(|rec| rec.time >= time)
    }

    /// Empties the cache and reports a full reset to the observer.
    pub fn clear(&mut self, observer: &mut dyn RangeObserver) {
        observer.on_range_will_change(RangeChange::Reset);
        self.records.clear();
        observer.on_range_did_change();
    }

    /// Atomically replaces the contents with a full authoritative list from
    /// the core and reports a full reset.
    ///
    /// The list is stably re-sorted newest-first, so callers may hand over
    /// feeds in any order; items sharing a timestamp keep their relative
    /// order from the input.
    pub fn refresh(&mut self, mut records: Vec<NewsRecord>, observer: &mut dyn RangeObserver) {
        records.sort_by_key(|rec| Reverse(rec.time));
        observer.on_range_will_change(RangeChange::Reset);
        self.records = records;
        observer.on_range_did_change();
    }

    /// Applies one incremental change announced by the core.
    ///
    /// The equal-time run `[lower_bound, upper_bound)` for the record's
    /// timestamp decides how the status is interpreted:
    ///
    /// - `New` with an empty run inserts at `lower_bound` and reports a
    ///   single-row insert. `New` on a non-empty run is a protocol violation:
    ///   the duplicate is rejected, warned about, and returned as an error.
    /// - `Deleted` with a non-empty run removes the *whole* run and reports
    ///   the removed range. Deletion is keyed by time alone, so unrelated
    ///   items sharing the timestamp are removed with it. `Deleted` on an
    ///   empty run is a protocol violation, handled like the duplicate case.
    /// - `Updated` on an absent item degrades to `New`: the item is not
    ///   cached yet, so there is nothing to update and it must still show
    ///   up. `Updated` on a cached item leaves the cached copy untouched;
    ///   in-place field replacement is a known gap, not implemented.
    ///
    /// Protocol violations never mutate the cache; the order invariant holds
    /// on every exit path.
    pub fn update(
        &mut self,
        record: NewsRecord,
        status: ChangeType,
        observer: &mut dyn RangeObserver,
    ) -> Result<(), NewsError> {
        let time = record.time;
        let lower = self.lower_bound(time);
        let upper = self.upper_bound(time);
        let in_model = lower != upper;

        let status = if status == ChangeType::Updated && !in_model {
            // Not cached, but the core wants it shown; treat as new.
            ChangeType::New
        } else {
            status
        };

        match status {
            ChangeType::New => {
                if in_model {
                    warn!(time, "got New, but news is already cached");
                    return Err(NewsError::DuplicateNews { time });
                }
                observer.on_range_will_change(RangeChange::Insert {
                    first: lower,
                    last: lower,
                });
                self.records.insert(lower, record);
                observer.on_range_did_change();
            }
            ChangeType::Deleted => {
                if !in_model {
                    warn!(time, "got Deleted, but news is not cached");
                    return Err(NewsError::UnknownNews { time });
                }
                observer.on_range_will_change(RangeChange::Remove {
                    first: lower,
                    last: upper - 1,
                });
                self.records.drain(lower..upper);
                observer.on_range_did_change();
            }
            ChangeType::Updated => {
                // Reachable only when the item is cached; the cached copy
                // stays as-is.
            }
        }

        Ok(())
    }
}
