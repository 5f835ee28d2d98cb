use chrono::NaiveDate;
use rust_decimal_macros::dec;
use spendz::error::SpendzError;
use spendz::model::{NewExpense, MAX_AMOUNT};
use spendz::store::backend::StorageBackend;
use spendz::store::fs_backend::FsBackend;
use spendz::store::FileStore;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    (dir, path)
}

fn new_expense(amount: rust_decimal::Decimal, category: &str, note: &str, date: &str) -> NewExpense {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    NewExpense::new(amount, category, note, date, "Uncategorized").unwrap()
}

#[test]
fn test_missing_file_is_empty_store() {
    let (_dir, path) = setup();
    let store = FileStore::open(FsBackend::new(&path)).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_round_trip_preserves_fields() {
    let (_dir, path) = setup();
    let mut store = FileStore::open(FsBackend::new(&path)).unwrap();
    store
        .add(new_expense(dec!(12.50), "food", "lunch with Ana ☕", "2024-01-05"))
        .unwrap();
    store.add(new_expense(dec!(40), "rent", "", "2024-01-01")).unwrap();
    store.add(new_expense(dec!(0.35), "fees", "atm", "2024-01-02")).unwrap();

    let reopened = FileStore::open(FsBackend::new(&path)).unwrap();
    assert_eq!(reopened.expenses(), store.expenses());
    assert_eq!(reopened.list_all(), store.list_all());
    assert_eq!(reopened.total().unwrap(), dec!(52.85));
}

#[test]
fn test_round_trip_preserves_large_amounts() {
    let (_dir, path) = setup();
    let mut store = FileStore::open(FsBackend::new(&path)).unwrap();
    for amount in [MAX_AMOUNT, dec!(1234567890123.45), dec!(9007199254740.99), dec!(0.01)] {
        store.add(new_expense(amount, "big", "", "2024-01-05")).unwrap();
    }

    let reopened = FileStore::open(FsBackend::new(&path)).unwrap();
    assert_eq!(reopened.expenses(), store.expenses());
    assert_eq!(reopened.total().unwrap(), store.total().unwrap());
}

#[test]
fn test_oversized_amount_is_never_written() {
    let (_dir, path) = setup();
    let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    let err = NewExpense::new(
        rust_decimal::Decimal::MAX,
        "big",
        "",
        date,
        "Uncategorized",
    )
    .unwrap_err();
    assert!(matches!(err, SpendzError::InvalidInput { field: "amount", .. }));

    let store = FileStore::open(FsBackend::new(&path)).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_file_is_top_level_array() {
    let (_dir, path) = setup();
    let mut store = FileStore::open(FsBackend::new(&path)).unwrap();
    store
        .add(new_expense(dec!(12.50), "food", "lunch", "2024-01-05"))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = value.as_array().expect("top-level array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["amount"], 12.5);
    assert_eq!(records[0]["category"], "food");
    assert_eq!(records[0]["note"], "lunch");
    assert_eq!(records[0]["date"], "2024-01-05");
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, path) = setup();
    let mut store = FileStore::open(FsBackend::new(&path)).unwrap();
    for i in 1..=3 {
        store
            .add(new_expense(dec!(1), "x", &format!("n{}", i), "2024-01-01"))
            .unwrap();
    }
    store.delete(2).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("expenses.json");
    let mut store = FileStore::open(FsBackend::new(&path)).unwrap();
    store.add(new_expense(dec!(3), "x", "", "2024-01-01")).unwrap();
    assert!(path.exists());
}

#[test]
fn test_corrupt_file_fails_and_is_untouched() {
    let (_dir, path) = setup();
    let garbage = "{ this is not json";
    fs::write(&path, garbage).unwrap();

    let err = FileStore::open(FsBackend::new(&path)).err().unwrap();
    match err {
        SpendzError::CorruptData { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected CorruptData, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), garbage);
}

#[test]
fn test_keyed_mapping_is_corrupt() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"{"1": {"id": 1, "amount": 2, "category": "x", "note": "", "date": "2024-01-01"}}"#,
    )
    .unwrap();
    assert!(matches!(
        FileStore::open(FsBackend::new(&path)),
        Err(SpendzError::CorruptData { .. })
    ));
}

#[test]
fn test_bad_record_fields_are_corrupt() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{"id": 1, "amount": 2, "category": "x", "note": "", "date": "2024-02-31"}]"#,
    )
    .unwrap();
    assert!(matches!(
        FileStore::open(FsBackend::new(&path)),
        Err(SpendzError::CorruptData { .. })
    ));
}

#[test]
fn test_missing_note_defaults_to_empty() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"[{"id": 4, "amount": 9.99, "category": "books", "date": "2024-03-01"}]"#,
    )
    .unwrap();
    let store = FileStore::open(FsBackend::new(&path)).unwrap();
    assert_eq!(store.expenses()[0].note, "");
    assert_eq!(store.expenses()[0].amount, dec!(9.99));
}

#[test]
fn test_backend_reports_none_for_missing_file() {
    let (_dir, path) = setup();
    let backend = FsBackend::new(&path);
    assert!(backend.load().unwrap().is_none());
    assert_eq!(backend.location(), path);
}
