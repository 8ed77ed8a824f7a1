//! The notification contract between the cache and whatever renders it.
//!
//! Every structural mutation is bracketed: the cache calls
//! [`RangeObserver::on_range_will_change`] with the affected range, performs
//! the mutation, then calls [`RangeObserver::on_range_did_change`]. Row
//! indices are only stable strictly between the two calls, which is the
//! window table views use to move or drop their row state.
//!
//! The trait is a plain capability so the cache stays free of any
//! presentation toolkit.

/// A contiguous run of rows affected by one cache mutation.
///
/// `first` and `last` are inclusive row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeChange {
    /// Rows `first..=last` are being inserted.
    Insert {
        /// Index of the first inserted row.
        first: usize,
        /// Index of the last inserted row.
        last: usize,
    },
    /// Rows `first..=last` are being removed.
    Remove {
        /// Index of the first removed row.
        first: usize,
        /// Index of the last removed row.
        last: usize,
    },
    /// The whole extent changed; positional state must be rebuilt.
    Reset,
}

impl RangeChange {
    /// Number of rows the change covers, or `None` for a reset.
    pub const fn row_count(self) -> Option<usize> {
        match self {
            Self::Insert { first, last } | Self::Remove { first, last } => Some(last - first + 1),
            Self::Reset => None,
        }
    }
}

/// Receiver for the will/did bracket around cache mutations.
pub trait RangeObserver {
    /// Called immediately before the rows described by `change` are mutated.
    fn on_range_will_change(&mut self, change: RangeChange);

    /// Called immediately after the mutation completes.
    fn on_range_did_change(&mut self);
}

/// Observer that ignores every notification, for callers that only want the
/// cache semantics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl RangeObserver for NullObserver {
    fn on_range_will_change(&mut self, _change: RangeChange) {}

    fn on_range_did_change(&mut self) {}
}
