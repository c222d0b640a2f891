use super::ProbeError;
use std::path::Path;

/// Only absolute, NUL-free paths are handed to statvfs.
pub(crate) fn validate_probe_path(path: &str) -> Result<(), ProbeError> {
    let reason = if path.trim().is_empty() {
        "path is empty"
    } else if path.contains('\0') {
        "contains a NUL byte"
    } else if !Path::new(path).is_absolute() {
        "path must be absolute"
    } else {
        return Ok(());
    };

    Err(ProbeError::InvalidPath { path: path.to_string(), reason })
}
