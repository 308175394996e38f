//! Deterministic item enhancement engine.
//!
//! Models the state transitions of a game item going through enhancement:
//! leveling up, failure penalties, repair, and a display-name projection.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic transitions and validation.
//!   No I/O, borrowed inputs, fresh outputs.
//! - **[`io`]**: Side-effecting helpers (config, item files).
//!
//! Orchestration modules ([`apply`], [`validate`]) coordinate core logic with
//! I/O to implement CLI commands.

pub mod apply;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod item;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;

pub use crate::core::engine::{fail, get, repair, succeed};
pub use crate::core::types::Transition;
pub use crate::item::Item;
