use serde::{Deserialize, Serialize};

/// A single item snapshot. Owned by the caller; the engine only maps one
/// snapshot to another.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub name: String,
    pub durability: i32,
    pub enhancement: u32,
}

impl Item {
    /// Build an item from its three fields.
    pub fn new(name: impl Into<String>, durability: i32, enhancement: u32) -> Self {
        Self {
            name: name.into(),
            durability,
            enhancement,
        }
    }

    /// True once durability has been worn down to zero or below.
    pub fn is_depleted(&self) -> bool {
        self.durability <= 0
    }
}

/// Starter item written by `enhancer init`.
pub fn sample_item() -> Item {
    Item::new("A Wooden Sword", 100, 0)
}
