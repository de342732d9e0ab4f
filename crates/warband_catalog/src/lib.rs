//! Fuzzy name catalogs for Warband.
//!
//! This crate provides:
//! - [`NameCatalog`] - Entries searchable by relaxed, partial, or misspelled name
//! - [`CatalogEntry`] - What an entry must expose to be catalogued
//! - [`UnitType`], [`Camp`], [`Adventure`] - The catalogued game objects
//! - [`loader`] - Reading entries from JSON data files
//! - [`Faction`], [`Category`], [`BattleSkill`] - Closed tag sets

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adventure;
pub mod camp;
pub mod catalog;
pub mod entry;
pub mod loader;
pub mod tags;
pub mod unit;

pub use adventure::{Adventure, AdventureCatalog};
pub use camp::{Camp, CampCatalog};
pub use catalog::{Lookup, MAX_SUGGESTIONS, NameCatalog};
pub use entry::CatalogEntry;
pub use tags::{BattleSkill, Category, Faction};
pub use unit::{UnitCatalog, UnitType};
