//! JSON file persistence for the store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use stocktrack_core::{StoreError, StoreResult};

use crate::store::Store;

impl Store {
    /// Replace the store's contents with the JSON object at `path`.
    ///
    /// A missing file (warning) or malformed content (error) leaves the store
    /// empty and is not a failure; any other I/O problem propagates.
    pub fn load(&mut self, path: &Path) -> StoreResult<()> {
        self.stock = BTreeMap::new();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "{} not found. Starting with empty stock.",
                    path.display()
                );
                return Ok(());
            }
            Err(err) => {
                return Err(StoreError::persistence(format!(
                    "failed to read {}: {err}",
                    path.display()
                )));
            }
        };

        match parse_stock(&contents) {
            Ok(stock) => {
                self.stock = stock;
                tracing::info!("Loaded data from {}", path.display());
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    "Failed to parse {}: {err}. Starting with empty stock.",
                    path.display()
                );
                Ok(())
            }
        }
    }

    /// Write the store to `path` as a pretty-printed JSON object.
    ///
    /// Failures are logged at error level and absorbed; save never fails to
    /// the caller.
    pub fn save(&self, path: &Path) {
        if let Err(err) = self.try_save(path) {
            tracing::error!("Failed to save data to {}: {err}", path.display());
        }
    }

    fn try_save(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| StoreError::persistence(err.to_string()))?;
        std::fs::write(path, json)
            .map_err(|err| StoreError::persistence(err.to_string()))?;
        tracing::info!("Saved data to {}", path.display());
        Ok(())
    }
}

/// Parse and validate a persisted stock object. The file carries no schema
/// metadata, so the store's own invariants are the only gate: non-empty item
/// names, non-negative quantities.
fn parse_stock(contents: &str) -> StoreResult<BTreeMap<String, i64>> {
    let stock: BTreeMap<String, i64> = serde_json::from_str(contents)
        .map_err(|err| StoreError::persistence(err.to_string()))?;

    for (item, &qty) in &stock {
        if item.trim().is_empty() {
            return Err(StoreError::persistence("empty item name"));
        }
        if qty < 0 {
            return Err(StoreError::persistence(format!(
                "negative quantity for '{item}'"
            )));
        }
    }
    Ok(stock)
}
