//! Orchestration for `enhancer apply` and `enhancer show`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::core::engine::{apply_all, get};
use crate::core::invariants::validate_item;
use crate::core::types::{Transition, TransitionSummary};
use crate::io::config::{EnhancerConfig, OutputConfig};
use crate::io::item_store::{load_item, write_item};
use crate::item::Item;

/// Result of running a transition sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Item after the last transition.
    pub item: Item,
    /// One summary per applied transition, in order.
    pub summaries: Vec<TransitionSummary>,
    /// True if the result was persisted back to the item file.
    pub written: bool,
}

/// Apply `transitions` to an in-memory item.
pub fn apply_to_item(item: &Item, transitions: &[Transition]) -> Result<ApplyOutcome> {
    if transitions.is_empty() {
        bail!("no transitions given");
    }
    let (next, summaries) = apply_all(transitions, item);
    for summary in &summaries {
        debug!(%summary, "transition applied");
    }
    if next.is_depleted() && !item.is_depleted() {
        warn!(name = %next.name, durability = next.durability, "item became depleted");
    }
    Ok(ApplyOutcome {
        item: next,
        summaries,
        written: false,
    })
}

/// Load an item, apply `transitions`, and optionally persist the result.
///
/// Persisting is refused when the sequence contains a display projection,
/// since the projected name is not canonical state, and when the result would
/// not load back under `cfg` (e.g. a repair above `max_durability`).
pub fn apply_from_path(
    item_path: &Path,
    transitions: &[Transition],
    cfg: &EnhancerConfig,
    write: bool,
) -> Result<ApplyOutcome> {
    if write && transitions.iter().any(|t| t.is_projection()) {
        bail!(
            "refusing to write {}: 'get' produces a display projection, not canonical state",
            item_path.display()
        );
    }

    let item = load_item(item_path, cfg.max_durability)
        .with_context(|| "load item for transitions")?;
    let mut outcome = apply_to_item(&item, transitions)?;

    if write {
        let errors = validate_item(&outcome.item, cfg.max_durability);
        if !errors.is_empty() {
            bail!(
                "refusing to write {}: result violates item invariants: {}",
                item_path.display(),
                errors.join("; ")
            );
        }
        write_item(item_path, &outcome.item)?;
        outcome.written = true;
    }
    info!(
        path = %item_path.display(),
        steps = transitions.len(),
        enhancement = outcome.item.enhancement,
        durability = outcome.item.durability,
        written = outcome.written,
        "transitions applied"
    );
    Ok(outcome)
}

/// Load an item and return its display name.
pub fn show_from_path(item_path: &Path, cfg: &EnhancerConfig) -> Result<String> {
    let item = load_item(item_path, cfg.max_durability)?;
    Ok(get(&item).name)
}

/// Render an item as JSON for stdout according to `output`.
pub fn render_item(item: &Item, output: &OutputConfig) -> Result<String> {
    let shown = if output.display_name {
        get(item)
    } else {
        item.clone()
    };
    let rendered = if output.pretty {
        serde_json::to_string_pretty(&shown)
    } else {
        serde_json::to_string(&shown)
    };
    rendered.context("serialize item")
}
