//! Integration tests for the CSV reviewer store.

mod common;

use lazypr::{CsvReviewerStore, ReviewerStore};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_missing_file_reads_as_no_reviewers() {
    let dir = common::temp_test_dir();
    let store = CsvReviewerStore::new(dir.path().join("reviewers.csv"));

    assert!(store.get("acme/widgets").unwrap().is_empty());
}

#[test]
fn test_set_then_get() {
    let dir = common::temp_test_dir();
    let path = dir.path().join("reviewers.csv");
    let store = CsvReviewerStore::new(&path);

    store
        .set("acme/widgets", &strings(&["alice", "bob"]))
        .unwrap();

    assert_eq!(store.get("acme/widgets").unwrap(), strings(&["alice", "bob"]));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "acme/widgets,\"alice,bob\"\n"
    );
}

#[test]
fn test_last_write_wins_per_repo() {
    let dir = common::temp_test_dir();
    let store = CsvReviewerStore::new(dir.path().join("reviewers.csv"));

    store.set("acme/widgets", &strings(&["alice"])).unwrap();
    store.set("acme/gears", &strings(&["carol", "dave"])).unwrap();
    store.set("acme/widgets", &strings(&["bob"])).unwrap();

    assert_eq!(store.get("acme/widgets").unwrap(), strings(&["bob"]));
    assert_eq!(store.get("acme/gears").unwrap(), strings(&["carol", "dave"]));

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.starts_with("acme/widgets,bob\n"));
}

#[test]
fn test_empty_reviewer_list_round_trips_as_empty() {
    let dir = common::temp_test_dir();
    let store = CsvReviewerStore::new(dir.path().join("reviewers.csv"));

    store.set("acme/widgets", &[]).unwrap();
    assert!(store.get("acme/widgets").unwrap().is_empty());
}

#[test]
fn test_reads_file_written_by_other_tools() {
    let dir = common::temp_test_dir();
    let path = dir.path().join("reviewers.csv");
    std::fs::write(&path, "widgets,\"alice,bob\"\r\ngears,carol\r\n").unwrap();

    let store = CsvReviewerStore::new(&path);
    assert_eq!(store.get("widgets").unwrap(), strings(&["alice", "bob"]));
    assert_eq!(store.get("gears").unwrap(), strings(&["carol"]));
    assert!(store.get("unknown").unwrap().is_empty());
}

#[test]
fn test_creates_missing_parent_directory() {
    let dir = common::temp_test_dir();
    let store = CsvReviewerStore::new(dir.path().join("nested/dir/reviewers.csv"));

    store.set("acme/widgets", &strings(&["alice"])).unwrap();
    assert_eq!(store.get("acme/widgets").unwrap(), strings(&["alice"]));
}
