//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module.

pub mod in_memory_repository;
pub mod json_repository;
pub mod msgpack_repository;
pub mod terminal_console;

use std::{path::Path, sync::Arc};

pub use in_memory_repository::InMemoryRepository;
pub use json_repository::JsonRepository;
pub use msgpack_repository::MsgPackRepository;
pub use terminal_console::TerminalConsole;

use crate::ports::TableRepository;

/// Default snapshot location.
pub const DEFAULT_TABLE_PATH: &str = "qtable.msgpack";

/// Pick the file format from the path: `.json` is JSON, anything else
/// MessagePack.
pub fn repository_for(path: &Path) -> Arc<dyn TableRepository + Send + Sync> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Arc::new(JsonRepository::new()),
        _ => Arc::new(MsgPackRepository::new()),
    }
}
