//! ページコントローラー
//!
//! 画面の状態遷移を純粋関数として持つ。通信・DOM操作は呼び出し側（WASM）が
//! 返された [`Command`] / [`Layout`] に従って行う。

use crate::editor::{EditorDraft, EnhancedText};
use crate::error::Result;
use crate::messages;
use crate::render::{self, ChapterDetail, MemoryBox};
use crate::types::{
    EnhanceRequest, EnhanceResponse, JournalEntry, MessageResponse, SaveEntryRequest,
    SaveEntryResponse,
};
use crate::view::{Layout, NavEvent, ScrollTarget, View};

/// 実行すべき通信
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Enhance(EnhanceRequest),
    Save(SaveEntryRequest),
    LoadEntries,
    DeleteAll,
}

/// メッセージボックス（キューなし、後勝ち）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Modal {
    message: Option<String>,
}

impl Modal {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

/// 処理中フラグ（ボタン無効化とスピナー表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Busy {
    pub enhancing: bool,
    pub saving: bool,
    pub deleting: bool,
}

/// ページ全体の状態
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub view: View,
    pub draft: EditorDraft,
    pub entries: Vec<JournalEntry>,
    pub memories: MemoryBox,
    pub detail: Option<ChapterDetail>,
    pub modal: Modal,
    pub busy: Busy,
    scroll_after_load: bool,
}

impl Page {
    pub fn navigate(&mut self, event: NavEvent) -> Layout {
        self.view = event.target();
        self.view.layout()
    }

    pub fn layout(&self) -> Layout {
        self.view.layout()
    }

    // ---- 画像 ----

    pub fn attach_image(&mut self, data_url: String) {
        self.draft.attachment.set(data_url);
    }

    pub fn clear_image(&mut self) {
        self.draft.attachment.clear();
    }

    // ---- AI強化 ----

    pub fn request_enhance(&mut self) -> Option<Command> {
        if self.busy.enhancing {
            return None;
        }
        match self.draft.enhance_request() {
            Ok(request) => {
                self.busy.enhancing = true;
                Some(Command::Enhance(request))
            }
            Err(err) => {
                self.modal.show(err.user_message());
                None
            }
        }
    }

    /// 成功・失敗どちらでも処理中フラグを戻す
    pub fn finish_enhance(&mut self, result: Result<EnhanceResponse>) {
        self.busy.enhancing = false;
        match result {
            Ok(response) => {
                self.draft.enhanced = EnhancedText::Ready(response.enhanced_text);
                self.modal.show(messages::ENHANCE_SUCCESS);
            }
            Err(err) => self.modal.show(err.user_message()),
        }
    }

    // ---- 保存 ----

    pub fn request_save(&mut self) -> Option<Command> {
        if self.busy.saving {
            return None;
        }
        match self.draft.save_request() {
            Ok(request) => {
                self.busy.saving = true;
                Some(Command::Save(request))
            }
            Err(err) => {
                self.modal.show(err.user_message());
                None
            }
        }
    }

    /// 成功時は下書きを初期化し、一覧の再取得を返す
    pub fn finish_save(&mut self, result: Result<SaveEntryResponse>) -> Option<Command> {
        self.busy.saving = false;
        match result {
            Ok(response) => {
                self.modal.show(response.message);
                self.draft.reset();
                self.scroll_after_load = true;
                Some(Command::LoadEntries)
            }
            Err(err) => {
                self.modal.show(err.user_message());
                None
            }
        }
    }

    // ---- 一覧 ----

    /// 取得前に現在の一覧を消す
    pub fn begin_load(&mut self) {
        self.entries.clear();
        self.memories = MemoryBox::Cleared;
    }

    /// 一覧を描画し、保存直後ならスクロール先を返す
    pub fn finish_load(&mut self, result: Result<Vec<JournalEntry>>) -> Option<ScrollTarget> {
        let scroll = std::mem::take(&mut self.scroll_after_load);
        match result {
            Ok(entries) => {
                self.memories = render::memory_box(&entries);
                self.entries = entries;
            }
            Err(_) => {
                self.entries.clear();
                self.memories = MemoryBox::Cleared;
                self.modal.show(messages::LIST_FAILED);
            }
        }
        scroll.then_some(ScrollTarget::MemoryBox)
    }

    // ---- 全削除 ----

    /// 確認ダイアログで拒否された場合は何もしない
    pub fn request_delete_all(&mut self, confirmed: bool) -> Option<Command> {
        if !confirmed || self.busy.deleting {
            return None;
        }
        self.busy.deleting = true;
        Some(Command::DeleteAll)
    }

    pub fn finish_delete_all(&mut self, result: Result<MessageResponse>) -> Option<Command> {
        self.busy.deleting = false;
        match result {
            Ok(response) => {
                self.modal.show(response.message);
                Some(Command::LoadEntries)
            }
            Err(err) => {
                self.modal.show(err.user_message());
                None
            }
        }
    }

    // ---- 詳細 ----

    pub fn open_chapter(&mut self, index: usize, api_base: &str) -> Option<Layout> {
        let entry = self.entries.get(index)?;
        self.detail = Some(render::chapter_detail(entry, api_base));
        Some(self.navigate(NavEvent::OpenChapter))
    }
}
