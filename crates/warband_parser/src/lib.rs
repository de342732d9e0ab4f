//! Blueprint parsing and army reconstruction for Warband.
//!
//! This crate turns free text such as "12 Swordsman 5 Archer" into an
//! [`Army`] resolved against a unit catalog.
//!
//! # Architecture
//!
//! ```text
//! "1 nus 10 swordsmen"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ BLUEPRINT       │  → [(1, "nus"), (10, "swordsmen")]
//! │ PARSER          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ NAME            │  → Nusala (general), Swordsman (common)
//! │ RESOLUTION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FACTION         │  → retry per faction when several are mixed
//! │ COERCION        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DECORATION      │  → camp and general skills
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`blueprint`] - Tokenizing `<qty> <name>` text
//! - [`army`] - Merged unit groups and their text forms
//! - [`assembler`] - Resolving blueprints into armies
//! - [`decorator`] - Camp and skill settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod army;
pub mod assembler;
pub mod blueprint;
pub mod decorator;

pub use army::{Army, UnitGroup};
pub use assembler::{ArmyAssembler, BuildOptions};
pub use blueprint::{Blueprint, BlueprintParser, BlueprintToken, is_parseable_name};
pub use decorator::ArmyDecorator;
