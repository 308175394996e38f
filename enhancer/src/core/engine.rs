//! Item transition engine.
//!
//! Every function borrows its input and returns a freshly built `Item`; the
//! caller's snapshot is never touched. Inputs are trusted to carry an
//! enhancement within `0..=MAX_ENHANCEMENT`.

use crate::core::types::{Transition, TransitionSummary};
use crate::item::Item;

/// Highest reachable enhancement tier.
pub const MAX_ENHANCEMENT: u32 = 20;
/// Durability after a repair.
pub const REPAIRED_DURABILITY: i32 = 100;
/// Tiers at or above this lose `HIGH_TIER_DURABILITY_LOSS` on failure.
pub const DURABILITY_TIER_THRESHOLD: u32 = 15;
/// Tiers strictly above this are demoted on failure.
pub const DEMOTION_THRESHOLD: u32 = 16;
pub const LOW_TIER_DURABILITY_LOSS: i32 = 5;
pub const HIGH_TIER_DURABILITY_LOSS: i32 = 10;

/// Raise enhancement by one, holding at `MAX_ENHANCEMENT`.
pub fn succeed(item: &Item) -> Item {
    Item {
        enhancement: item.enhancement.saturating_add(1).min(MAX_ENHANCEMENT),
        ..item.clone()
    }
}

/// Apply the failure penalty.
///
/// - Below tier 15 durability drops by 5, from tier 15 upward by 10.
/// - Above tier 16 the item is also demoted one tier.
///
/// Tiers 15 and 16 take the heavier durability loss without demotion.
/// Durability is not clamped at zero.
pub fn fail(item: &Item) -> Item {
    let loss = if item.enhancement < DURABILITY_TIER_THRESHOLD {
        LOW_TIER_DURABILITY_LOSS
    } else {
        HIGH_TIER_DURABILITY_LOSS
    };
    let enhancement = if item.enhancement > DEMOTION_THRESHOLD {
        item.enhancement - 1
    } else {
        item.enhancement
    };

    Item {
        durability: item.durability.saturating_sub(loss),
        enhancement,
        ..item.clone()
    }
}

/// Restore durability to `REPAIRED_DURABILITY`.
pub fn repair(item: &Item) -> Item {
    Item {
        durability: REPAIRED_DURABILITY,
        ..item.clone()
    }
}

/// Display projection: prefix the name with `[+N] ` when enhanced.
///
/// The result is meant for presentation; it is not the item's canonical name.
pub fn get(item: &Item) -> Item {
    if item.enhancement == 0 {
        return item.clone();
    }
    Item {
        name: display_name(item),
        ..item.clone()
    }
}

/// Name as rendered by `get`.
pub fn display_name(item: &Item) -> String {
    if item.enhancement == 0 {
        item.name.clone()
    } else {
        format!("[+{}] {}", item.enhancement, item.name)
    }
}

/// Dispatch a single transition.
pub fn apply(transition: Transition, item: &Item) -> Item {
    match transition {
        Transition::Succeed => succeed(item),
        Transition::Fail => fail(item),
        Transition::Repair => repair(item),
        Transition::Get => get(item),
    }
}

/// Apply transitions left to right, each consuming the previous snapshot.
///
/// Returns the final item plus one summary per step, in order.
pub fn apply_all(transitions: &[Transition], item: &Item) -> (Item, Vec<TransitionSummary>) {
    let mut current = item.clone();
    let mut summaries = Vec::with_capacity(transitions.len());
    for &transition in transitions {
        let next = apply(transition, &current);
        summaries.push(summarize(transition, &current, &next));
        current = next;
    }
    (current, summaries)
}

/// Describe the effect of `transition` given its input and output snapshots.
pub fn summarize(transition: Transition, before: &Item, after: &Item) -> TransitionSummary {
    TransitionSummary {
        transition,
        enhancement_before: before.enhancement,
        enhancement_after: after.enhancement,
        durability_before: before.durability,
        durability_after: after.durability,
        capped: transition == Transition::Succeed && before.enhancement >= MAX_ENHANCEMENT,
        demoted: after.enhancement < before.enhancement,
    }
}
