//! 画面遷移（ビュールーター）
//!
//! 表示状態は閉じた列挙型で表し、各状態から表示/非表示と見出し・スクロール先を導く。
//!
//! ```text
//! Home --BeginJournal--> Editor <--BackToEditor / OpenChapter--> Details
//! Editor --ShowMemories--> MemoriesOnlyScroll（同じ画面で一覧までスクロール）
//! ```

use crate::messages;

/// 表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// 初期状態（アプリ領域を隠す）
    #[default]
    Home,
    Editor,
    Details,
    /// エディタを表示したまま一覧へスクロール
    MemoriesOnlyScroll,
}

/// スクロール先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    AppTop,
    MemoryBox,
}

impl ScrollTarget {
    /// 対象要素のDOM id
    pub fn element_id(&self) -> &'static str {
        match self {
            ScrollTarget::AppTop => "app-section",
            ScrollTarget::MemoryBox => "memory-box",
        }
    }
}

/// 各表示状態のレイアウト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub app_visible: bool,
    pub editor_visible: bool,
    pub details_visible: bool,
    pub heading: Option<&'static str>,
    pub scroll: Option<ScrollTarget>,
}

impl View {
    pub fn layout(self) -> Layout {
        match self {
            View::Home => Layout {
                app_visible: false,
                editor_visible: true,
                details_visible: false,
                heading: None,
                scroll: None,
            },
            View::Editor => Layout {
                app_visible: true,
                editor_visible: true,
                details_visible: false,
                heading: Some(messages::EDITOR_HEADING),
                scroll: Some(ScrollTarget::AppTop),
            },
            View::Details => Layout {
                app_visible: true,
                editor_visible: false,
                details_visible: true,
                heading: Some(messages::DETAILS_HEADING),
                scroll: Some(ScrollTarget::AppTop),
            },
            View::MemoriesOnlyScroll => Layout {
                app_visible: true,
                editor_visible: true,
                details_visible: false,
                heading: Some(messages::EDITOR_HEADING),
                scroll: Some(ScrollTarget::MemoryBox),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Editor => "editor",
            View::Details => "details",
            View::MemoriesOnlyScroll => "memories_only_scroll",
        }
    }
}

/// 画面遷移イベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// トップの矢印
    BeginJournal,
    /// 一覧カードのクリック
    OpenChapter,
    /// 詳細画面の戻るボタン
    BackToEditor,
    /// 「思い出」ボタン
    ShowMemories,
    ReturnHome,
}

impl NavEvent {
    /// 遷移表
    pub fn target(self) -> View {
        match self {
            NavEvent::BeginJournal => View::Editor,
            NavEvent::OpenChapter => View::Details,
            NavEvent::BackToEditor => View::Editor,
            NavEvent::ShowMemories => View::MemoriesOnlyScroll,
            NavEvent::ReturnHome => View::Home,
        }
    }
}
