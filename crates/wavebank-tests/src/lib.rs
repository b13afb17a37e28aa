//! wavebank End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the full conversion flow:
//!
//! - Generation: legacy source + bank config -> artifact and report
//! - **Determinism**: byte-identical artifacts across runs
//! - Properties: extraction and table bounds over arbitrary inputs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavebank-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use wavebank_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| generate(&source, &config, format).unwrap().artifact, 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{
    compute_hash, verify_determinism, verify_hash_determinism, DeterminismResult, DiffInfo,
};
pub use fixtures::{legacy_source, LegacyBankFixture};
