mod disk_space;
pub(crate) mod validation;

pub(crate) use disk_space::bytes_to_gb;
use disk_space::get_disk_space;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    #[error("Volume probing is disabled (ALLOW_PROBE=\"no\")")]
    Disabled,

    #[error("Invalid probe path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("statvfs failed for {path}: {source}")]
    Statvfs {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(not(unix))]
    #[error("Volume probing is not supported on this platform")]
    Unsupported,
}

/// Capacity of a mounted volume, in GB.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct VolumeReading {
    pub path: String,
    pub total_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
}

/// Validate `path` and read its capacity.
pub(crate) fn probe(path: &str) -> Result<VolumeReading, ProbeError> {
    validation::validate_probe_path(path)?;
    let space = get_disk_space(path)?;
    tracing::debug!("Probed {}: total={} free={} bytes", path, space.total, space.free);

    Ok(VolumeReading {
        path: path.to_string(),
        total_gb: bytes_to_gb(space.total),
        used_gb: bytes_to_gb(space.used),
        free_gb: bytes_to_gb(space.free),
    })
}
