//! エラー型定義
//!
//! フロントエンドの全リクエストが共有する失敗分類:
//! 入力検証 / サーバー報告エラー / 通信失敗

use thiserror::Error;

use crate::messages;

/// クライアント側エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// 送信前の入力検証エラー（リクエストは送らない）
    #[error("{0}")]
    Validation(String),

    /// サーバーが返したエラー（`error` フィールドをそのまま表示）
    #[error("{0}")]
    Server(String),

    /// リクエスト自体が完了しなかった
    #[error("{}", messages::NETWORK_ERROR)]
    Network,
}

impl ClientError {
    /// モーダルに表示する文言
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ClientError>;
