//! Core building blocks for Warband.
//!
//! This crate provides:
//! - [`normalize`] - Deterministic string relaxation used for fuzzy name matching
//! - [`PrefixTrie`] - Arena-backed prefix tree with synonym propagation
//! - [`MessageLog`] - Caller-supplied sinks for non-fatal diagnostics
//! - [`TagArray`] - Dense arrays keyed by closed tag sets
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod log;
pub mod normalize;
pub mod tag_array;
pub mod trie;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use log::{Discard, MessageLog, Warnings};
pub use normalize::{deep_trim, relax_articles, relax_case, relax_spelling};
pub use tag_array::{Tag, TagArray};
pub use trie::{PrefixTrie, TrieNode};
