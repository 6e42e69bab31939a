pub mod chapter_details;
pub mod editor;
pub mod hero;
pub mod image_picker;
pub mod memory_list;
pub mod message_modal;
