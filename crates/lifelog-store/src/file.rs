//! Store file operations - load and save the durable fact store.
//!
//! The store file holds the whole serialized `FactStore` as one JSON array.
//! Saves replace the file's prior content entirely; this is a whole-file
//! overwrite, not an append log.

use lifelog_core::{Error, FactStore, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The durable resource backing one fact store.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the fact store from disk.
    ///
    /// A missing or unreadable file is a recoverable default: a first run
    /// must not crash, so this logs a warning and yields an empty store.
    /// A file that is present but does not parse is a distinct
    /// `CorruptStore` condition; the caller decides whether to abort.
    pub fn load(&self) -> Result<FactStore> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(source) => {
                let err = Error::ResourceUnavailable {
                    path: self.path.display().to_string(),
                    source,
                };
                warn!("{} - starting with an empty store", err);
                return Ok(FactStore::new());
            }
        };

        match FactStore::from_json(&data) {
            Ok(store) => {
                info!(
                    "loaded {} facts from {}",
                    store.len(),
                    self.path.display()
                );
                Ok(store)
            }
            Err(err) => Err(Error::corrupt(
                self.path.display().to_string(),
                err.to_string(),
            )),
        }
    }

    /// Write the full serialized store, replacing prior content.
    pub fn save(&self, store: &FactStore) -> Result<()> {
        let data = store.to_json()?;
        fs::write(&self.path, data).map_err(|source| Error::SaveFailed {
            path: self.path.display().to_string(),
            source,
        })?;
        info!("fact store saved to {}", self.path.display());
        Ok(())
    }
}
