//! Integration tests for Layer 1: Catalog
//!
//! Tests for fuzzy lookup, entry admission, and data-file loading.

mod admission;
