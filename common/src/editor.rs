//! エディタの下書き状態と送信前チェック
//!
//! 添付画像はグローバル変数ではなく下書きが所有し、保存リクエストへ渡す。

use crate::error::{ClientError, Result};
use crate::messages;
use crate::types::{EnhanceRequest, SaveEntryRequest};

/// 強化テキスト欄
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnhancedText {
    /// プレースホルダー表示中（未強化）
    #[default]
    Placeholder,
    Ready(String),
}

impl EnhancedText {
    pub fn display(&self) -> &str {
        match self {
            EnhancedText::Placeholder => messages::ENHANCED_PLACEHOLDER,
            EnhancedText::Ready(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, EnhancedText::Placeholder)
    }

    /// 保存時に送る値（プレースホルダーは空文字）
    fn for_save(&self) -> String {
        match self {
            EnhancedText::Placeholder => String::new(),
            EnhancedText::Ready(text) => text.clone(),
        }
    }
}

/// 保存待ちの添付画像（Data URL）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingAttachment(Option<String>);

impl PendingAttachment {
    pub fn set(&mut self, data_url: String) {
        self.0 = Some(data_url);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn data_url(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

/// エディタの下書き
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorDraft {
    pub title: String,
    pub text: String,
    pub enhanced: EnhancedText,
    pub attachment: PendingAttachment,
}

impl EditorDraft {
    /// 保存成功後の初期化
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn enhance_request(&self) -> Result<EnhanceRequest> {
        enhance_request(&self.text)
    }

    /// 保存リクエストを組み立てる（タイトル・本文が空ならエラー）
    pub fn save_request(&self) -> Result<SaveEntryRequest> {
        let title = self.title.trim();
        let text = self.text.trim();
        if title.is_empty() || text.is_empty() {
            return Err(ClientError::Validation(messages::SAVE_MISSING_FIELDS.to_string()));
        }

        Ok(SaveEntryRequest {
            title: title.to_string(),
            original_text: text.to_string(),
            enhanced_text: self.enhanced.for_save(),
            image_url: self.attachment.data_url().map(str::to_string),
        })
    }
}

/// 強化リクエストを組み立てる（空白のみならエラー）
pub fn enhance_request(text: &str) -> Result<EnhanceRequest> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ClientError::Validation(messages::ENHANCE_EMPTY.to_string()));
    }
    Ok(EnhanceRequest {
        journal_text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> EditorDraft {
        let mut draft = EditorDraft {
            title: "  Sunday  ".to_string(),
            text: "Pancakes for breakfast.".to_string(),
            enhanced: EnhancedText::Ready("Pancakes for breakfast 🥞".to_string()),
            ..Default::default()
        };
        draft.attachment.set("data:image/jpeg;base64,/9j/".to_string());
        draft
    }

    #[test]
    fn test_enhance_blank_is_validation_error() {
        for text in ["", "   ", "\n\t"] {
            let err = enhance_request(text).unwrap_err();
            assert_eq!(err, ClientError::Validation(messages::ENHANCE_EMPTY.to_string()));
        }
    }

    #[test]
    fn test_enhance_request_trims() {
        let request = enhance_request("  hello  ").expect("リクエスト生成失敗");
        assert_eq!(request.journal_text, "hello");
    }

    #[test]
    fn test_save_requires_title_and_text() {
        let mut draft = filled_draft();
        draft.title = " ".to_string();
        assert!(draft.save_request().unwrap_err().is_validation());

        let mut draft = filled_draft();
        draft.text = String::new();
        assert_eq!(
            draft.save_request().unwrap_err(),
            ClientError::Validation(messages::SAVE_MISSING_FIELDS.to_string())
        );
    }

    #[test]
    fn test_save_request_carries_attachment() {
        let request = filled_draft().save_request().expect("リクエスト生成失敗");
        assert_eq!(request.title, "Sunday");
        assert_eq!(request.original_text, "Pancakes for breakfast.");
        assert_eq!(request.enhanced_text, "Pancakes for breakfast 🥞");
        assert_eq!(request.image_url.as_deref(), Some("data:image/jpeg;base64,/9j/"));
    }

    #[test]
    fn test_save_request_blanks_placeholder() {
        let mut draft = filled_draft();
        draft.enhanced = EnhancedText::Placeholder;
        draft.attachment.clear();

        let request = draft.save_request().expect("リクエスト生成失敗");
        assert_eq!(request.enhanced_text, "");
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, EditorDraft::default());
        assert!(draft.enhanced.is_placeholder());
        assert!(!draft.attachment.is_present());
        assert_eq!(draft.enhanced.display(), messages::ENHANCED_PLACEHOLDER);
    }

    #[test]
    fn test_attachment_overwrite() {
        let mut attachment = PendingAttachment::default();
        attachment.set("data:a".to_string());
        attachment.set("data:b".to_string());
        assert_eq!(attachment.data_url(), Some("data:b"));
    }
}
