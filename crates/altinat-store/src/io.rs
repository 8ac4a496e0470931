//! Atomic file writes and best-effort JSON decoding

use serde::de::DeserializeOwned;
use std::path::Path;

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Read a file to a string, mapping a missing file to `None`
pub fn read_optional(path: &Path) -> std::io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Decode a persisted JSON value, substituting `default` when the value is
/// missing or does not parse as `T`.
pub fn parse_or_default<T: DeserializeOwned>(raw: Option<&str>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "unparsable persisted value, using default");
            default
        }
    }
}
