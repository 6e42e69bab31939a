//! エントリ保存モジュール
//!
//! データディレクトリの `entries.json` に全エントリを保持し、
//! 変更のたびに一時ファイル経由で書き換える。

use crate::error::{JournalError, Result};
use crate::memory_file;
use chrono::{DateTime, Local};
use journal_common::{JournalEntry, SaveEntryRequest};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const STORE_FILE_NAME: &str = "entries.json";

/// 保存ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 次に採番するID
    next_id: u64,
    entries: Vec<JournalEntry>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: EntryStore::CURRENT_VERSION,
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// 保存結果
#[derive(Debug, Clone)]
pub struct SavedEntry {
    pub entry: JournalEntry,
    /// テキストファイルの書き出しに成功したか
    pub file_saved: bool,
}

#[derive(Debug)]
pub struct EntryStore {
    dir: PathBuf,
    data: StoreFile,
}

impl EntryStore {
    const CURRENT_VERSION: u32 = 1;

    /// データディレクトリを開く（なければ作成）
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        std::fs::create_dir_all(dir.join(memory_file::FILES_DIR_NAME))?;

        let store_path = dir.join(STORE_FILE_NAME);
        let data = if store_path.exists() {
            let reader = BufReader::new(File::open(&store_path)?);
            let data: StoreFile = serde_json::from_reader(reader)?;
            if data.version != Self::CURRENT_VERSION {
                return Err(JournalError::Config(format!(
                    "unsupported store version {} in {}",
                    data.version,
                    store_path.display()
                )));
            }
            data
        } else {
            StoreFile::default()
        };

        info!("Loaded {} entries from {}", data.entries.len(), store_path.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            data,
        })
    }

    pub fn files_dir(&self) -> PathBuf {
        self.dir.join(memory_file::FILES_DIR_NAME)
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    /// エントリを保存
    ///
    /// テキストファイルの書き出しに失敗しても、エントリ自体は `fileName` なしで保存する。
    pub fn save(&mut self, request: SaveEntryRequest, now: DateTime<Local>) -> Result<SavedEntry> {
        let mut entry = JournalEntry {
            id: format!("{:x}{:04x}", now.timestamp_micros(), self.data.next_id),
            title: request.title,
            original_text: request.original_text,
            enhanced_text: Some(request.enhanced_text),
            image_url: request.image_url.filter(|url| !url.is_empty()),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            timestamp: Some(now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
            file_name: None,
        };

        let file_saved = match memory_file::write(&self.files_dir(), &entry, &now) {
            Ok(file_name) => {
                info!("Saved entry to local file: {}", file_name);
                entry.file_name = Some(file_name);
                true
            }
            Err(e) => {
                warn!("Could not write text file for '{}': {}", entry.title, e);
                false
            }
        };

        self.data.next_id += 1;
        self.data.entries.push(entry.clone());
        if let Err(e) = self.persist(&self.data) {
            self.data.entries.pop();
            if let Some(file_name) = entry.memory_file() {
                if let Err(remove_err) = memory_file::remove(&self.files_dir(), file_name) {
                    warn!("Could not remove {}: {}", file_name, remove_err);
                }
            }
            return Err(e);
        }

        Ok(SavedEntry { entry, file_saved })
    }

    /// 新しい順の一覧
    pub fn list(&self) -> Vec<JournalEntry> {
        let mut entries = self.data.entries.clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// 全エントリと日記ファイルを削除し、削除件数を返す
    ///
    /// entries.json の書き換えに成功してからメモリ上の一覧とファイルを消す。
    pub fn clear(&mut self) -> Result<usize> {
        let emptied = StoreFile {
            version: self.data.version,
            next_id: self.data.next_id,
            entries: Vec::new(),
        };
        self.persist(&emptied)?;

        let removed_entries = std::mem::replace(&mut self.data, emptied).entries;
        let files_dir = self.files_dir();
        for entry in &removed_entries {
            if let Some(file_name) = entry.memory_file() {
                if let Err(e) = memory_file::remove(&files_dir, file_name) {
                    warn!("Could not remove {}: {}", file_name, e);
                }
            }
        }

        Ok(removed_entries.len())
    }

    fn persist(&self, data: &StoreFile) -> Result<()> {
        let store_path = self.dir.join(STORE_FILE_NAME);
        let tmp_path = self.dir.join(format!("{}.tmp", STORE_FILE_NAME));

        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.flush()?;
        drop(writer);
        std::fs::rename(&tmp_path, &store_path)?;
        Ok(())
    }
}
