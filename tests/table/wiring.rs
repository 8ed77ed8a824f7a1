use newstable_rs::{ChangeType, Column, NewsTableModel, RangeChange};

use crate::common::{RecordingObserver, assert_newest_first, fixture_records};

const NEW: i32 = ChangeType::New.as_raw();
const UPDATED: i32 = ChangeType::Updated.as_raw();
const DELETED: i32 = ChangeType::Deleted.as_raw();

#[test]
fn raw_statuses_drive_the_cache() {
    let mut model = NewsTableModel::new(RecordingObserver::new());

    model.update_news(10, "ten", "https://example.org/10", None, None, NEW);
    model.update_news(5, "five", "https://example.org/5", Some("desk"), None, NEW);
    model.update_news(10, "ten", "https://example.org/10", None, None, DELETED);

    assert_eq!(model.row_count(), 1);
    assert_eq!(model.record(0).map(|r| r.time), Some(5));
    assert_eq!(
        model.observer().changes(),
        vec![
            RangeChange::Insert { first: 0, last: 0 },
            RangeChange::Insert { first: 1, last: 1 },
            RangeChange::Remove { first: 0, last: 0 },
        ]
    );
    model.observer().assert_bracketed();
}

#[test]
fn unknown_raw_status_is_ignored() {
    let mut model = NewsTableModel::new(RecordingObserver::new());
    model.update_news(10, "ten", "https://example.org/10", None, None, NEW);

    model.update_news(10, "ten", "https://example.org/10", None, None, 7);
    model.update_news(11, "eleven", "https://example.org/11", None, None, -1);

    assert_eq!(model.row_count(), 1);
    assert_eq!(model.observer().changes().len(), 1);
}

#[test]
fn duplicate_insert_through_the_wiring_is_fail_soft() {
    let mut model = NewsTableModel::new(RecordingObserver::new());
    model.update_news(10, "ten", "https://example.org/10", None, None, NEW);

    // The core misbehaving must not panic or grow the table.
    model.update_news(10, "ten again", "https://example.org/10b", None, None, NEW);

    assert_eq!(model.row_count(), 1);
    assert_eq!(
        model.record(0).map(|r| r.text.as_str()),
        Some("ten"),
        "the first record wins"
    );
    assert_eq!(model.observer().changes().len(), 1);
}

#[test]
fn updated_status_for_an_unseen_item_inserts_it() {
    let mut model = NewsTableModel::new(RecordingObserver::new());

    model.update_news(3, "three", "https://example.org/3", None, None, UPDATED);

    assert_eq!(model.row_count(), 1);
    assert_eq!(
        model.observer().changes(),
        vec![RangeChange::Insert { first: 0, last: 0 }]
    );
}

#[test]
fn refresh_loads_a_feed_snapshot() {
    let mut model = NewsTableModel::new(RecordingObserver::new());
    model.refresh(fixture_records("news_feed.json"));

    assert_eq!(model.row_count(), 4);
    assert_newest_first(model.cache());
    assert_eq!(model.observer().changes(), vec![RangeChange::Reset]);

    // Newest item first, with its optional fields intact.
    assert_eq!(
        model.data(0, Column::Text).and_then(|c| c.as_str()),
        Some("Wallet 2.1 released")
    );
    assert_eq!(
        model.data(0, Column::Author).and_then(|c| c.as_str()),
        Some("release-team")
    );

    // The two items sharing a timestamp sit in one contiguous run at the end.
    assert_eq!(model.record(2).map(|r| r.time), Some(1_700_000_100));
    assert_eq!(model.record(3).map(|r| r.time), Some(1_700_000_100));
}

#[test]
fn deleting_a_shared_timestamp_drops_the_run() {
    let mut model = NewsTableModel::new(RecordingObserver::new());
    model.refresh(fixture_records("news_feed.json"));

    model.update_news(1_700_000_100, "", "", None, None, DELETED);

    assert_eq!(model.row_count(), 2);
    assert_eq!(
        model.observer().changes().last(),
        Some(&RangeChange::Remove { first: 2, last: 3 })
    );
    assert_newest_first(model.cache());
}

#[test]
fn clear_resets_the_table() {
    let mut model = NewsTableModel::new(RecordingObserver::new());
    model.refresh(fixture_records("news_feed.json"));

    model.clear();

    assert_eq!(model.row_count(), 0);
    assert_eq!(
        model.observer().changes(),
        vec![RangeChange::Reset, RangeChange::Reset]
    );
}
