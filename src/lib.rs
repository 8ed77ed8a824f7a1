//! newstable-rs: in-memory, time-ordered news cache with minimal-diff row
//! notifications.
//!
//! The wallet core owns the authoritative news feed and announces changes one
//! at a time. [`NewsCache`] mirrors that feed locally, keeps it sorted
//! newest-first, and brackets every structural mutation with a pair of
//! [`RangeObserver`] calls carrying the exact affected row range, so a view
//! layer can repaint rows instead of redrawing the whole table.
//!
//! [`NewsTableModel`] sits on top of the cache and exposes the records
//! through a fixed column enumeration and a matching set of
//! column-independent roles, which is what generic table views consume.

pub mod cache;
pub mod core;
pub mod observe;
pub mod table;

pub use crate::cache::NewsCache;
pub use crate::core::{ChangeType, NewsError, NewsRecord};
pub use crate::observe::{NullObserver, RangeChange, RangeObserver};
pub use crate::table::{Cell, Column, NewsTableModel, Role};
