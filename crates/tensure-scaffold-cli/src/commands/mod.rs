//! CLI command implementations for tensure-scaffold.
//!
//! The binary currently has a single command, module generation.

pub mod generate;
