//! Validation helpers for `enhancer validate`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::io::config::EnhancerConfig;
use crate::io::item_store::load_item;
use crate::item::Item;

/// Item validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    pub item: Item,
    /// Durability is at or below zero; valid, but worth reporting.
    pub depleted: bool,
}

/// Validate an item file against the schema and item invariants.
pub fn validate_item_file(item_path: &Path, cfg: &EnhancerConfig) -> Result<ValidateOutcome> {
    let item = load_item(item_path, cfg.max_durability)
        .with_context(|| format!("validate {}", item_path.display()))?;
    Ok(ValidateOutcome {
        depleted: item.is_depleted(),
        item,
    })
}
