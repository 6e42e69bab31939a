//! Memory Journal backend
//!
//! 日記の保存・一覧・削除と、Ollamaによる書き直しを提供するAPIサーバー。

pub mod cli;
pub mod config;
pub mod error;
pub mod memory_file;
pub mod ollama;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;
