//! Integration tests for Layer 0: Foundation
//!
//! Tests for the text relaxation pipeline, the prefix trie, and message sinks.

mod messages;
mod normalize;
mod trie;
