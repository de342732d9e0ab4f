//! REPL, CLI, and settings persistence for Warband.
//!
//! This crate provides:
//! - [`Repl`] - Interactive army-building loop
//! - [`Session`] - Catalogs, settings, and pending warnings
//! - Settings serialization and deserialization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;
pub mod settings;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{LoadReport, Session};
pub use settings::Settings;
