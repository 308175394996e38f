//! Deterministic, pure logic for item transitions.
//!
//! Core modules must be free of I/O side effects. They operate on borrowed
//! item snapshots and return fresh values suitable for tests.

pub mod engine;
pub mod invariants;
pub mod types;
