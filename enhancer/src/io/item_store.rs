//! Item load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::invariants::validate_item;
use crate::item::Item;

/// JSON Schema (Draft 2020-12) for item files.
pub const ITEM_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/item/v1.schema.json"
));

/// Load an item from disk and validate it (schema + invariants).
pub fn load_item(item_path: &Path, max_durability: i32) -> Result<Item> {
    debug!(path = %item_path.display(), "loading item");
    let contents = fs::read_to_string(item_path)
        .with_context(|| format!("read item {}", item_path.display()))?;
    let item = parse_item(&contents, max_durability)
        .with_context(|| format!("load item {}", item_path.display()))?;
    if item.is_depleted() {
        warn!(name = %item.name, durability = item.durability, "item is depleted");
    }
    Ok(item)
}

/// Parse and validate an item from JSON text.
pub fn parse_item(contents: &str, max_durability: i32) -> Result<Item> {
    let value: Value = serde_json::from_str(contents).context("parse item json")?;
    validate_schema(&value)?;
    let item: Item = serde_json::from_value(value).context("deserialize item")?;
    let errors = validate_item(&item, max_durability);
    if !errors.is_empty() {
        return Err(anyhow!("item invariants failed: {}", errors.join("; ")));
    }
    Ok(item)
}

/// Atomically write an item as pretty JSON (temp file + rename).
pub fn write_item(item_path: &Path, item: &Item) -> Result<()> {
    debug!(path = %item_path.display(), name = %item.name, "writing item");
    let mut buf = serde_json::to_string_pretty(item)?;
    buf.push('\n');
    let tmp_path = item_path.with_extension("json.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp item {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, item_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace item {}", item_path.display()));
    }
    Ok(())
}

fn validate_schema(item: &Value) -> Result<()> {
    let schema_value: Value = serde_json::from_str(ITEM_SCHEMA).context("parse item schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(item) {
        let messages = compiled
            .iter_errors(item)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "item schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
