//! 日記テキストファイル
//!
//! 保存したエントリを読みやすいテキストとして書き出し、ダウンロード用に提供する。

use crate::error::{JournalError, Result};
use chrono::{DateTime, Local};
use journal_common::JournalEntry;
use std::path::{Component, Path, PathBuf};

pub const FILES_DIR_NAME: &str = "journal_files";

const MAX_NAME_CHARS: usize = 100;
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// タイトルをファイル名に使える形にする
///
/// 制御文字も除く（`Content-Disposition` に載せられないため）。
pub fn sanitize_filename(title: &str) -> String {
    let name: String = title
        .replace(' ', "_")
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c) && !c.is_control())
        .take(MAX_NAME_CHARS)
        .collect();
    if name.is_empty() {
        return "untitled".to_string();
    }
    name
}

/// `{タイトル}_{日時マイクロ秒}.txt`
pub fn file_name_for(title: &str, now: &DateTime<Local>) -> String {
    format!(
        "{}_{}.txt",
        sanitize_filename(title),
        now.format("%Y%m%d_%H%M%S_%6f")
    )
}

/// テキストファイルの内容
pub fn render(entry: &JournalEntry) -> String {
    let mut text = String::new();
    text.push_str(&format!("Title: {}\n", entry.title));
    text.push_str(&format!("Date: {} Time: {}\n", entry.date, entry.time));
    if entry.image().is_some() {
        text.push_str("Image Attached: Yes (Base64 data not stored in text file for brevity)\n");
    }
    text.push_str("\n-- Original Entry --\n");
    text.push_str(&entry.original_text);
    text.push_str("\n\n-- AI-Enhanced Version --\n");
    text.push_str(entry.enhancement().unwrap_or("No AI enhancement provided."));
    text.push('\n');
    text
}

/// エントリをファイルに書き出し、ファイル名を返す
pub fn write(files_dir: &Path, entry: &JournalEntry, now: &DateTime<Local>) -> Result<String> {
    std::fs::create_dir_all(files_dir)?;
    let file_name = file_name_for(&entry.title, now);
    std::fs::write(files_dir.join(&file_name), render(entry))?;
    Ok(file_name)
}

/// ダウンロード要求のファイル名を検証してパスに変換
///
/// ディレクトリの外を指す名前は拒否する。
pub fn resolve(files_dir: &Path, file_name: &str) -> Result<PathBuf> {
    let candidate = Path::new(file_name);
    let mut components = candidate.components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if file_name.is_empty() || !is_plain_name || file_name.contains(|c: char| c == '/' || c == '\\') {
        return Err(JournalError::InvalidFileName);
    }

    let path = files_dir.join(candidate);
    if !path.is_file() {
        return Err(JournalError::FileNotFound);
    }
    Ok(path)
}

/// ファイルを削除（存在しなければ何もしない）
pub fn remove(files_dir: &Path, file_name: &str) -> Result<()> {
    let path = resolve(files_dir, file_name);
    match path {
        Ok(path) => Ok(std::fs::remove_file(path)?),
        Err(JournalError::FileNotFound) => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("日時生成失敗")
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename(""), "untitled");
        assert_eq!(sanitize_filename("My Best Day"), "My_Best_Day");
        assert_eq!(sanitize_filename("a<b>c:d\"e/f\\g|h?i*j"), "abcdefghij");
        assert_eq!(sanitize_filename("../../etc"), "....etc");
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_filename("Line\none\r\ttab"), "Lineonetab");
        assert_eq!(sanitize_filename("\n\u{7f}"), "untitled");
        assert_eq!(
            file_name_for("Rainy\nday", &fixed_now()),
            "Rainyday_20240102_030405_000000.txt"
        );
    }

    #[test]
    fn test_sanitize_truncates_by_chars() {
        let long = "ä".repeat(150);
        assert_eq!(sanitize_filename(&long).chars().count(), 100);
    }

    #[test]
    fn test_file_name_format() {
        assert_eq!(
            file_name_for("Beach day", &fixed_now()),
            "Beach_day_20240102_030405_000000.txt"
        );
    }

    #[test]
    fn test_render_without_image_or_enhancement() {
        let entry = JournalEntry {
            title: "Quiet".to_string(),
            original_text: "Stayed in.".to_string(),
            date: "2024-01-02".to_string(),
            time: "03:04:05".to_string(),
            ..Default::default()
        };

        let text = render(&entry);
        assert!(text.starts_with("Title: Quiet\nDate: 2024-01-02 Time: 03:04:05\n"));
        assert!(!text.contains("Image Attached"));
        assert!(text.contains("-- Original Entry --\nStayed in."));
        assert!(text.ends_with("-- AI-Enhanced Version --\nNo AI enhancement provided.\n"));
    }

    #[test]
    fn test_render_with_image() {
        let entry = JournalEntry {
            title: "Photo".to_string(),
            original_text: "Look!".to_string(),
            enhanced_text: Some("Look at this ✨".to_string()),
            image_url: Some("data:image/png;base64,AA".to_string()),
            ..Default::default()
        };

        let text = render(&entry);
        assert!(text.contains("Image Attached: Yes"));
        assert!(!text.contains("base64,AA"));
        assert!(text.contains("Look at this ✨"));
    }

    #[test]
    fn test_write_and_resolve() {
        let dir = tempdir().expect("Failed to create temp dir");
        let files_dir = dir.path().join(FILES_DIR_NAME);
        let entry = JournalEntry {
            title: "Saved".to_string(),
            original_text: "body".to_string(),
            ..Default::default()
        };

        let name = write(&files_dir, &entry, &fixed_now()).expect("書き込み失敗");
        let path = resolve(&files_dir, &name).expect("解決失敗");
        let content = std::fs::read_to_string(path).expect("読み込み失敗");
        assert!(content.contains("Title: Saved"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = tempdir().expect("Failed to create temp dir");
        for name in ["", "..", "../secret.txt", "a/b.txt", "a\\b.txt", "/etc/passwd"] {
            assert!(
                matches!(resolve(dir.path(), name), Err(JournalError::InvalidFileName)),
                "{name:?} は拒否されるべき"
            );
        }
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert!(matches!(
            resolve(dir.path(), "nothing.txt"),
            Err(JournalError::FileNotFound)
        ));
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert!(remove(dir.path(), "gone.txt").is_ok());
    }
}
