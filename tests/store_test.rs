//! エントリ保存テスト
//!
//! entries.json への保存・再読み込み・並び順・全削除を検証

use chrono::{DateTime, Local, TimeZone};
use journal_common::SaveEntryRequest;
use memory_journal::error::JournalError;
use memory_journal::memory_file;
use memory_journal::store::EntryStore;
use tempfile::tempdir;

fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 10, hour, minute, 0)
        .single()
        .expect("日時生成失敗")
}

fn request(title: &str) -> SaveEntryRequest {
    SaveEntryRequest {
        title: title.to_string(),
        original_text: format!("{} happened today.", title),
        enhanced_text: String::new(),
        image_url: None,
    }
}

/// 空のデータディレクトリ
#[test]
fn test_open_empty_store() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = EntryStore::open(dir.path()).expect("オープン失敗");

    assert!(store.is_empty());
    assert!(store.list().is_empty());
    assert!(dir.path().join(memory_file::FILES_DIR_NAME).is_dir());
}

/// 保存と再読み込み
#[test]
fn test_save_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");

    let saved = {
        let mut store = EntryStore::open(dir.path()).expect("オープン失敗");
        store.save(request("Picnic"), at(12, 30)).expect("保存失敗")
    };

    assert!(saved.file_saved);
    assert_eq!(saved.entry.date, "2024-03-10");
    assert_eq!(saved.entry.time, "12:30:00");
    assert_eq!(
        saved.entry.file_name.as_deref(),
        Some("Picnic_20240310_123000_000000.txt")
    );
    assert!(!saved.entry.id.is_empty());

    let reopened = EntryStore::open(dir.path()).expect("再オープン失敗");
    let entries = reopened.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0], saved.entry);
}

/// 一覧は新しい順
#[test]
fn test_list_newest_first() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    store.save(request("Morning"), at(8, 0)).expect("保存失敗");
    store.save(request("Evening"), at(20, 0)).expect("保存失敗");
    store.save(request("Noon"), at(12, 0)).expect("保存失敗");

    let titles: Vec<_> = store.list().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Evening", "Noon", "Morning"]);
}

/// IDは重複しない
#[test]
fn test_ids_are_unique() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    let a = store.save(request("Same"), at(9, 0)).expect("保存失敗");
    let b = store.save(request("Same"), at(9, 0)).expect("保存失敗");
    assert_ne!(a.entry.id, b.entry.id);
}

/// 空の画像URLは保存しない
#[test]
fn test_blank_image_is_dropped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    let mut req = request("NoPhoto");
    req.image_url = Some(String::new());
    let saved = store.save(req, at(10, 0)).expect("保存失敗");
    assert_eq!(saved.entry.image_url, None);
}

/// 全削除でファイルも消える
#[test]
fn test_clear_removes_entries_and_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    let saved = store.save(request("Gone"), at(7, 0)).expect("保存失敗");
    store.save(request("Also gone"), at(7, 5)).expect("保存失敗");
    let file_name = saved.entry.file_name.expect("ファイル名があるはず");
    let files_dir = store.files_dir();
    assert!(memory_file::resolve(&files_dir, &file_name).is_ok());

    let removed = store.clear().expect("削除失敗");
    assert_eq!(removed, 2);
    assert!(store.is_empty());
    assert!(matches!(
        memory_file::resolve(&files_dir, &file_name),
        Err(JournalError::FileNotFound)
    ));

    let reopened = EntryStore::open(dir.path()).expect("再オープン失敗");
    assert!(reopened.is_empty());
}

/// entries.json を書けないときは全削除しない
#[test]
fn test_clear_failure_keeps_entries_and_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    let saved = store.save(request("Kept"), at(6, 0)).expect("保存失敗");
    let file_name = saved.entry.file_name.expect("ファイル名があるはず");
    let files_dir = store.files_dir();

    // 一時ファイルの位置にディレクトリを置いて書き込みを失敗させる
    let tmp_path = dir.path().join("entries.json.tmp");
    std::fs::create_dir(&tmp_path).expect("ディレクトリ作成失敗");

    assert!(store.clear().is_err());
    assert_eq!(store.len(), 1);
    assert!(memory_file::resolve(&files_dir, &file_name).is_ok());

    std::fs::remove_dir(&tmp_path).expect("ディレクトリ削除失敗");
    let reopened = EntryStore::open(dir.path()).expect("再オープン失敗");
    let entries = reopened.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name.as_deref(), Some(file_name.as_str()));
}

/// entries.json を書けないときは保存を取り消し、テキストファイルも残さない
#[test]
fn test_save_rolls_back_when_store_write_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    let tmp_path = dir.path().join("entries.json.tmp");
    std::fs::create_dir(&tmp_path).expect("ディレクトリ作成失敗");

    assert!(store.save(request("Lost"), at(11, 0)).is_err());
    assert!(store.is_empty());
    let leftover = std::fs::read_dir(store.files_dir())
        .expect("ディレクトリ読み込み失敗")
        .count();
    assert_eq!(leftover, 0);

    std::fs::remove_dir(&tmp_path).expect("ディレクトリ削除失敗");
    store.save(request("Retry"), at(11, 5)).expect("保存失敗");
    assert_eq!(store.len(), 1);
}

/// テキストファイルを書けなくてもエントリは保存する
#[test]
fn test_save_without_text_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = EntryStore::open(dir.path()).expect("オープン失敗");

    // journal_files をただのファイルに置き換える
    let files_dir = store.files_dir();
    std::fs::remove_dir(&files_dir).expect("ディレクトリ削除失敗");
    std::fs::write(&files_dir, "not a directory").expect("書き込み失敗");

    let saved = store.save(request("NoFile"), at(9, 30)).expect("保存失敗");
    assert!(!saved.file_saved);
    assert_eq!(saved.entry.file_name, None);

    let reopened_entries = {
        std::fs::remove_file(&files_dir).expect("ファイル削除失敗");
        EntryStore::open(dir.path()).expect("再オープン失敗").list()
    };
    assert_eq!(reopened_entries.len(), 1);
    assert_eq!(reopened_entries[0].title, "NoFile");
    assert_eq!(reopened_entries[0].file_name, None);
}

/// 不明なバージョンは読み込まない
#[test]
fn test_unknown_version_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("entries.json"),
        r#"{"version": 99, "next_id": 1, "entries": []}"#,
    )
    .expect("書き込み失敗");

    let err = EntryStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, JournalError::Config(_)));
}

/// 壊れたファイルはエラー
#[test]
fn test_corrupt_store_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("entries.json"), "{").expect("書き込み失敗");

    let err = EntryStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, JournalError::JsonParse(_)));
}
