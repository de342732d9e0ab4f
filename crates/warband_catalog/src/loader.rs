//! Reading catalog records from JSON data files.
//!
//! A data file holds either a single record or an array of records. A data
//! directory is read file by file in name order, so load order (and with it
//! which of two colliding entries wins) is reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use warband_foundation::{Error, ErrorContext, MessageLog, Result};

use crate::catalog::NameCatalog;
use crate::entry::CatalogEntry;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Decodes the records held in `text`; `origin` names the source in errors.
pub fn parse_entries<T: DeserializeOwned>(text: &str, origin: &str) -> Result<Vec<T>> {
    match serde_json::from_str::<OneOrMany<T>>(text) {
        Ok(OneOrMany::Many(records)) => Ok(records),
        Ok(OneOrMany::One(record)) => Ok(vec![record]),
        Err(err) => Err(Error::data(origin, err.to_string())),
    }
}

/// Reads the records in the JSON file at `path`.
pub fn load_entries<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path).map_err(|err| Error::io(path, &err))?;
    parse_entries(&text, &path.display().to_string())
        .map_err(|err| err.with_context(ErrorContext::new().with_path(path)))
}

/// Lists the `*.json` files directly inside `dir`, sorted by name.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for item in fs::read_dir(dir).map_err(|err| Error::io(dir, &err))? {
        let path = item.map_err(|err| Error::io(dir, &err))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads the records of every `*.json` file in `dir`, in file-name order.
pub fn load_dir<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for path in json_files(dir)? {
        let mut batch = load_entries(&path)?;
        tracing::debug!(path = %path.display(), count = batch.len(), "records read");
        records.append(&mut batch);
    }
    Ok(records)
}

/// Adds the records of every data file in `dir` to `catalog`.
///
/// Rejected records are reported to `log` by the catalog; a file that
/// cannot be read or decoded aborts the load with an error, leaving the
/// records of earlier files in place. Returns the number of records added.
pub fn populate<T>(catalog: &mut NameCatalog<T>, dir: &Path, log: &mut dyn MessageLog) -> Result<usize>
where
    T: CatalogEntry + DeserializeOwned,
{
    let frame = || format!("populating catalog from {}", dir.display());
    let mut added = 0;
    for path in json_files(dir).map_err(|err| err.with_frame(frame()))? {
        let records: Vec<T> = load_entries(&path).map_err(|err| err.with_frame(frame()))?;
        let total = records.len();
        let accepted = catalog.extend(records, log);
        if accepted < total {
            tracing::warn!(path = %path.display(), rejected = total - accepted, "records rejected");
        }
        added += accepted;
    }
    tracing::info!(dir = %dir.display(), added, "catalog populated");
    Ok(added)
}
