//! Integration tests for Layer 2: Parser
//!
//! Tests for the blueprint grammar and army reconstruction against a catalog.

mod assembly;
mod grammar;
mod round_trip;
