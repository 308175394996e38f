//! Test-only helpers for constructing item fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::item::Item;

/// Create an item with explicit fields.
pub fn item(name: &str, durability: i32, enhancement: u32) -> Item {
    Item::new(name, durability, enhancement)
}

/// Mid-tier item: `+10`, nearly broken.
pub fn sword() -> Item {
    item("A Wooden Sword", 5, 10)
}

/// Item already at the enhancement cap.
pub fn book() -> Item {
    item("An Old Book", 5, 20)
}

/// High-tier item that is demoted on failure.
pub fn shield() -> Item {
    item("An Iron Shield", 15, 19)
}

/// Write `item` as pretty JSON under `dir` and return its path.
pub fn write_item_fixture(dir: &Path, file_name: &str, item: &Item) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let mut buf = serde_json::to_string_pretty(item).context("serialize item fixture")?;
    buf.push('\n');
    fs::write(&path, buf).with_context(|| format!("write fixture {}", path.display()))?;
    Ok(path)
}
