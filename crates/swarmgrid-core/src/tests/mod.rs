//! Test module for determinism and integration tests.
//!
//! This module complements the per-file unit tests with whole-run coverage:
//! - **Determinism tests**: tie-break priority and declaration-order rules
//! - **Integration tests**: end-to-end scenarios through the turn driver
//! - **Helper functions**: board and driver setup utilities

mod determinism;
mod helpers;

pub use helpers::*;
