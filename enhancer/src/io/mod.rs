//! I/O helpers for enhancer commands.

pub mod config;
pub mod init;
pub mod item_store;
