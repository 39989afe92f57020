//! Loading assistive auto-fill patches from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::CliError;

/// Reads a camelCase JSON patch. Unknown keys are ignored; `null` clears a
/// nullable field.
pub fn load_patch<P: DeserializeOwned>(path: &Path) -> Result<P, CliError> {
    let data = fs::read_to_string(path)?;
    let patch = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), "autofill patch loaded");
    Ok(patch)
}
