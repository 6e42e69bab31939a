//! Memory Journal Common Library
//!
//! バックエンドとWeb(WASM)で共有される型と画面ロジック

pub mod api;
pub mod controller;
pub mod editor;
pub mod error;
pub mod messages;
pub mod render;
pub mod types;
pub mod view;

pub use controller::{Busy, Command, Modal, Page};
pub use editor::{EditorDraft, EnhancedText, PendingAttachment};
pub use error::{ClientError, Result};
pub use render::{CardImage, ChapterDetail, EntryCard, MemoryBox};
pub use types::{
    EnhanceRequest, EnhanceResponse, ErrorResponse, JournalEntry, MessageResponse,
    SaveEntryRequest, SaveEntryResponse,
};
pub use view::{Layout, NavEvent, ScrollTarget, View};
