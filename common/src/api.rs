//! バックエンドAPIの契約
//!
//! エンドポイントのパスと、レスポンスの分類ロジック（通信部分はWASM側）。

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::messages;
use crate::types::ErrorResponse;

pub const ENHANCE_PATH: &str = "/enhance";
pub const SAVE_ENTRY_PATH: &str = "/save_entry";
pub const GET_ENTRIES_PATH: &str = "/get_entries";
pub const DELETE_ALL_ENTRIES_PATH: &str = "/delete_all_entries";
pub const MEMORY_FILE_PATH: &str = "/get_memory_file";

/// ベースURLとパスを連結
pub fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), path)
}

/// テキストファイルのダウンロードURL
pub fn memory_file_url(api_base: &str, file_name: &str) -> String {
    endpoint(
        api_base,
        &format!("{}/{}", MEMORY_FILE_PATH, urlencoding::encode(file_name)),
    )
}

/// HTTPレスポンスを成功値またはエラーに分類
///
/// - 2xx: 本文をJSONとして解釈（解釈できなければサーバーエラー扱い）
/// - それ以外: `{"error": ...}` の文言をそのまま使う
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body)
            .map_err(|_| ClientError::Server(messages::UNEXPECTED_RESPONSE.to_string()));
    }

    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if !err.error.trim().is_empty() => Err(ClientError::Server(err.error)),
        _ => Err(ClientError::Server(format!("Server error ({})", status))),
    }
}
