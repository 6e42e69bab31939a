//! ジャーナルの型定義
//!
//! バックエンドとWeb(WASM)で共有される型:
//! - JournalEntry: 保存済みの思い出（メモリー）1件
//! - 各エンドポイントのリクエスト/レスポンス

use serde::{Deserialize, Serialize};

/// 保存済みジャーナルエントリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// バックエンドが採番するID
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    pub title: String,

    pub original_text: String,

    /// AI強化テキスト（空 = 未強化）
    #[serde(default)]
    pub enhanced_text: Option<String>,

    /// Data URL またはバックエンド上のURL
    #[serde(default)]
    pub image_url: Option<String>,

    /// 表示用の日付（バックエンドが付与）
    #[serde(default)]
    pub date: String,

    /// 表示用の時刻（バックエンドが付与）
    #[serde(default)]
    pub time: String,

    /// ISO-8601 タイムスタンプ（並び替え用）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// ダウンロード用テキストファイル名
    #[serde(default)]
    pub file_name: Option<String>,
}

impl JournalEntry {
    /// 空文字を「なし」として扱った強化テキスト
    pub fn enhancement(&self) -> Option<&str> {
        non_blank(self.enhanced_text.as_deref())
    }

    /// 空文字を「なし」として扱った画像URL
    pub fn image(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }

    /// 空文字を「なし」として扱ったファイル名
    pub fn memory_file(&self) -> Option<&str> {
        non_blank(self.file_name.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// POST /enhance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    #[serde(default)]
    pub journal_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_text: String,
}

/// POST /save_entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEntryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub enhanced_text: String,
    /// 添付なしの場合は null を送る
    #[serde(default)]
    pub image_url: Option<String>,
}

/// POST /save_entry のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveEntryResponse {
    pub message: String,
    #[serde(default)]
    pub entry: Option<JournalEntry>,
}

/// メッセージのみのレスポンス（DELETE /delete_all_entries など）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
