//! JSON snapshot load/save.

use super::atomic::atomic_write_file;
use crate::error::{PalaverError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

/// Serialize `value` as pretty JSON and write it atomically.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        PalaverError::PersistenceError(format!(
            "failed to serialize snapshot for '{}': {}",
            path.display(),
            e
        ))
    })?;
    json.push('\n');

    atomic_write_file(path, &json)?;
    log::info!("saved snapshot to {}", path.display());
    Ok(())
}

/// Load a JSON snapshot. A missing file yields `T::default()`.
pub fn load_json<T: DeserializeOwned + Default, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("no snapshot at {}, starting empty", path.display());
            return Ok(T::default());
        }
        Err(e) => {
            return Err(PalaverError::PersistenceError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            )));
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        PalaverError::PersistenceError(format!("failed to parse '{}': {}", path.display(), e))
    })
}
