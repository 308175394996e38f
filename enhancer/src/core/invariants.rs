//! Item invariants not expressible via JSON Schema.

use crate::core::engine::MAX_ENHANCEMENT;
use crate::item::Item;

/// Check the bounds an input item must satisfy before the engine sees it:
/// - `name` is non-blank and carries no `[+N] ` display marker
/// - `enhancement <= MAX_ENHANCEMENT`
/// - `durability <= max_durability`
///
/// Negative durability is allowed; it is how `fail` reports a depleted item.
/// Returns stable error messages in field order (empty on success).
pub fn validate_item(item: &Item, max_durability: i32) -> Vec<String> {
    let mut errors = Vec::new();

    if item.name.trim().is_empty() {
        errors.push("name must be non-empty".to_string());
    } else if has_level_marker(&item.name) {
        errors.push(format!(
            "name '{}' already carries a level marker",
            item.name
        ));
    }

    if item.durability > max_durability {
        errors.push(format!(
            "durability {} exceeds maximum {}",
            item.durability, max_durability
        ));
    }

    if item.enhancement > MAX_ENHANCEMENT {
        errors.push(format!(
            "enhancement {} exceeds maximum {}",
            item.enhancement, MAX_ENHANCEMENT
        ));
    }

    errors
}

/// True if `name` starts with a `[+<digits>] ` prefix as produced by `get`.
fn has_level_marker(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("[+") else {
        return false;
    };
    let Some((digits, tail)) = rest.split_once(']') else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && tail.starts_with(' ')
}
