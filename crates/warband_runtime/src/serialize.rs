//! Settings serialization and deserialization using `MessagePack`.
//!
//! This module provides functions for saving and loading [`Settings`]
//! to/from files using the `MessagePack` binary format.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use warband_foundation::{Error, Result};

use crate::settings::Settings;

/// Serializes settings to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(settings: &Settings) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(settings).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes settings from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Settings> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves settings to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(settings: &Settings, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, &e))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(settings)?;

    writer.write_all(&bytes).map_err(|e| Error::io(path, &e))?;
    writer.flush().map_err(|e| Error::io(path, &e))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "settings saved");
    Ok(())
}

/// Loads settings from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, &e))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| Error::io(path, &e))?;

    from_bytes(&bytes)
}

/// Loads settings from `path`, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or decoded.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    match File::open(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(e) => Err(Error::io(path, &e)),
        Ok(_) => load_from_file(path),
    }
}
