//! Backspin End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the decode, reverse and export
//! flows:
//!
//! - Reversal: source file -> reversed WAV with the expected samples
//! - Conformance: output readable by an independent WAV reader
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p backspin-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod format_validators;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
