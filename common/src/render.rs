//! 表示モデル生成
//!
//! エントリ → 画面表示用の値への純粋な変換。DOMへの反映はWASM側で行う。

use crate::api;
use crate::messages;
use crate::types::JournalEntry;

/// カードの画像部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Photo(String),
    Placeholder,
}

/// 一覧カード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCard {
    pub title: String,
    pub date_line: String,
    pub image: CardImage,
}

/// 詳細画面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDetail {
    pub title: String,
    pub date_line: String,
    pub original_text: String,
    pub enhanced_text: String,
    /// None の場合は画像領域を隠す
    pub image_url: Option<String>,
    /// None の場合はダウンロードリンクを隠す
    pub download_href: Option<String>,
}

/// 思い出一覧（メモリーボックス）の表示状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemoryBox {
    /// 取得前・取得中・取得失敗（一覧は空）
    #[default]
    Cleared,
    /// 0件
    Empty,
    Cards(Vec<EntryCard>),
}

impl MemoryBox {
    pub fn cards(&self) -> &[EntryCard] {
        match self {
            MemoryBox::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn shows_empty_message(&self) -> bool {
        matches!(self, MemoryBox::Empty)
    }
}

/// "日付 時刻"
pub fn date_line(entry: &JournalEntry) -> String {
    format!("{} {}", entry.date, entry.time).trim().to_string()
}

fn display_title(entry: &JournalEntry) -> String {
    if entry.title.trim().is_empty() {
        messages::UNTITLED.to_string()
    } else {
        entry.title.clone()
    }
}

pub fn entry_card(entry: &JournalEntry) -> EntryCard {
    EntryCard {
        title: display_title(entry),
        date_line: date_line(entry),
        image: match entry.image() {
            Some(url) => CardImage::Photo(url.to_string()),
            None => CardImage::Placeholder,
        },
    }
}

/// バックエンドの返却順のまま並べる（クライアント側で並び替えない）
pub fn memory_box(entries: &[JournalEntry]) -> MemoryBox {
    if entries.is_empty() {
        MemoryBox::Empty
    } else {
        MemoryBox::Cards(entries.iter().map(entry_card).collect())
    }
}

pub fn chapter_detail(entry: &JournalEntry, api_base: &str) -> ChapterDetail {
    ChapterDetail {
        title: display_title(entry),
        date_line: date_line(entry),
        original_text: entry.original_text.clone(),
        enhanced_text: entry
            .enhancement()
            .unwrap_or(messages::NO_ENHANCEMENT)
            .to_string(),
        image_url: entry.image().map(str::to_string),
        download_href: entry
            .memory_file()
            .map(|name| api::memory_file_url(api_base, name)),
    }
}
