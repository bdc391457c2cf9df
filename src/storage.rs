use crate::chart_def::ChartDef;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Failure while moving a chart definition to or from its JSON wire form.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a chart definition to its compact JSON wire form.
pub fn to_json(def: &ChartDef) -> Result<String, StorageError> {
    Ok(serde_json::to_string(def)?)
}

/// Parse a chart definition from JSON text. Unknown enum tags and missing
/// required fields are rejected as malformed input.
pub fn from_json(json: &str) -> Result<ChartDef, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Save a chart definition as pretty JSON.
pub fn save_json<P: AsRef<Path>>(def: &ChartDef, path: P) -> Result<(), StorageError> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(def)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Load a chart definition previously written with [`save_json`].
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ChartDef, StorageError> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}
