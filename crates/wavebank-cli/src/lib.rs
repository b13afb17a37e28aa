//! Wavebank CLI library.
//!
//! This crate provides the core functionality for the `wavebank` binary:
//! input loading, atomic output writes, and the command implementations.

pub mod commands;
pub mod input;
pub mod output;
