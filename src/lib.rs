//! Warband - Fuzzy army blueprint resolution
//!
//! This crate re-exports all layers of the Warband system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: warband_runtime    — REPL, CLI, settings persistence
//! Layer 2: warband_parser     — Blueprint grammar, army assembly
//! Layer 1: warband_catalog    — Unit, camp and adventure catalogs
//! Layer 0: warband_foundation — Normalizer, prefix trie, tag arrays, errors
//! ```

pub use warband_catalog as catalog;
pub use warband_foundation as foundation;
pub use warband_parser as parser;
pub use warband_runtime as runtime;
