//! Archive Integration Tests
//!
//! Committed transactions land in the configured sink; rolled-back work
//! and Idle writes never do.

use pizdb::prelude::*;
use pizdb::{Archive, LogRecord, UndoEntry};
use tempfile::TempDir;

fn read_records(path: &std::path::Path) -> Vec<LogRecord> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_jsonl_archive_receives_committed_log() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("archive.jsonl");
    let config = EngineConfig::new().with_archive(ArchiveConfig::Jsonl { path: path.clone() });

    let mut db = PizDb::with_config(&config).unwrap();
    db.set("idle", 1).unwrap();
    db.begin().unwrap();
    db.set("a", 5).unwrap();
    db.unset("idle").unwrap();
    db.commit().unwrap();

    let records = read_records(&path);
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].entry, UndoEntry::Begin);
    assert_eq!(
        records[1].entry,
        UndoEntry::Set {
            key: "a".into(),
            old: None,
            new: 5
        }
    );
    assert_eq!(
        records[2].entry,
        UndoEntry::Unset {
            key: "idle".into(),
            old: Some(1)
        }
    );
    assert_eq!(records[3].entry, UndoEntry::Commit);
    assert!(records.iter().enumerate().all(|(i, r)| r.seq == i as u64));
    assert!(records.windows(2).all(|w| w[0].at <= w[1].at));
}

#[test]
fn test_jsonl_archive_appends_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("archive.jsonl");
    let config = EngineConfig::new().with_archive(ArchiveConfig::Jsonl { path: path.clone() });

    for _ in 0..2 {
        let mut db = PizDb::with_config(&config).unwrap();
        db.begin().unwrap();
        db.set("a", 1).unwrap();
        db.commit().unwrap();
    }

    let records = read_records(&path);
    assert_eq!(records.len(), 6);
    // Each instance numbers its transactions from 1.
    assert!(records.iter().all(|r| r.txn_id == 1));
}

#[test]
fn test_rolled_back_entries_are_not_archived() {
    let mut db = PizDb::new();
    db.begin().unwrap();
    db.set("a", 1).unwrap();
    db.get("a").unwrap();
    db.rollback().unwrap();
    assert_eq!(db.engine().archive().len(), 0);

    db.set("b", 2).unwrap();
    db.commit().unwrap();

    let kinds: Vec<_> = db
        .engine()
        .archive()
        .records()
        .iter()
        .map(|r| r.entry.kind())
        .collect();
    assert_eq!(kinds, vec!["begin", "rollback", "set", "commit"]);
}

#[test]
fn test_config_file_drives_engine() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pizdb.toml");
    std::fs::write(&config_path, "counts_mode = \"legacy\"\n\n[archive]\nkind = \"discard\"\n")
        .unwrap();

    let config = EngineConfig::from_file(&config_path).unwrap();
    let mut db = PizDb::with_config(&config).unwrap();
    assert_eq!(db.engine().counts_mode(), CountsMode::Legacy);

    db.begin().unwrap();
    db.set("a", 1).unwrap();
    db.commit().unwrap();
    assert_eq!(db.engine().archive().len(), 3);
}

#[test]
fn test_bad_config_is_rejected() {
    let err = EngineConfig::from_toml_str("counts_mode = \"fuzzy\"").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = EngineConfig::from_toml_str("unknown_key = 1").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
