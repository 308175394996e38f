//! Shared deterministic types for the transition engine.
//!
//! These types define stable contracts between the core and the CLI host.
//! They must not depend on external state or I/O.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Externally-resolved event that selects which transition to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Enhancement attempt succeeded.
    Succeed,
    /// Enhancement attempt failed.
    Fail,
    /// Durability restored.
    Repair,
    /// Display projection (name gains a `[+N]` marker).
    Get,
}

impl Transition {
    pub fn label(self) -> &'static str {
        match self {
            Transition::Succeed => "succeed",
            Transition::Fail => "fail",
            Transition::Repair => "repair",
            Transition::Get => "get",
        }
    }

    /// True if the transition only changes presentational fields.
    pub fn is_projection(self) -> bool {
        matches!(self, Transition::Get)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Transition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "succeed" => Ok(Transition::Succeed),
            "fail" => Ok(Transition::Fail),
            "repair" => Ok(Transition::Repair),
            "get" => Ok(Transition::Get),
            other => Err(format!(
                "unknown transition '{other}' (expected succeed, fail, repair or get)"
            )),
        }
    }
}

/// Before/after view of a single applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionSummary {
    pub transition: Transition,
    pub enhancement_before: u32,
    pub enhancement_after: u32,
    pub durability_before: i32,
    pub durability_after: i32,
    /// `succeed` was applied at the enhancement cap and had no effect.
    pub capped: bool,
    /// `fail` dropped the enhancement tier.
    pub demoted: bool,
}

impl fmt::Display for TransitionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: enhancement {} -> {}, durability {} -> {}",
            self.transition,
            self.enhancement_before,
            self.enhancement_after,
            self.durability_before,
            self.durability_after
        )?;
        if self.capped {
            f.write_str(" (capped)")?;
        }
        if self.demoted {
            f.write_str(" (demoted)")?;
        }
        Ok(())
    }
}
