//! 画面に表示する固定文言

pub const EDITOR_HEADING: &str = "Write a New Chapter ✍️";
pub const DETAILS_HEADING: &str = "Chapter Details 📖";

pub const ENHANCED_PLACEHOLDER: &str = "Your AI-enhanced entry will appear here...";
pub const NO_ENHANCEMENT: &str = "No AI enhancement was made for this memory.";
pub const NO_MEMORIES: &str = "No memories yet. Start writing your first chapter! 🌱";
pub const UNTITLED: &str = "Untitled memory";

pub const ENHANCE_EMPTY: &str = "Please write something in your journal before enhancing! ✍️";
pub const ENHANCE_SUCCESS: &str = "Your entry has been beautifully enhanced! ✨";
pub const SAVE_MISSING_FIELDS: &str = "Please give your memory a title and write something before saving. 📝";
pub const LIST_FAILED: &str = "Could not load your memories. Please try again later. 💔";
pub const DELETE_CONFIRM: &str =
    "Are you sure you want to delete ALL of your memories? This cannot be undone.";

pub const NETWORK_ERROR: &str =
    "Could not connect to the journal server. Please make sure the backend is running. 🔌";
pub const UNEXPECTED_RESPONSE: &str = "The server sent a response that could not be understood.";
