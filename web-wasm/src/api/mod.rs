mod client;

pub use client::{delete_all_entries, enhance, get_entries, save_entry};
