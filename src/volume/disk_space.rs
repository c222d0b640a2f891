use super::ProbeError;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Disk space measurements in bytes.
pub(crate) struct DiskSpace {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

pub(crate) fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Get disk space info via statvfs.
#[cfg(unix)]
#[allow(unsafe_code)]
pub(crate) fn get_disk_space(mount_path: &str) -> Result<DiskSpace, ProbeError> {
    use std::ffi::CString;

    let c_path = CString::new(mount_path).map_err(|err| ProbeError::Statvfs {
        path: mount_path.to_string(),
        source: err.into(),
    })?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };

    let ret = unsafe { libc::statvfs(c_path.as_ptr(), &raw mut stat) };
    if ret != 0 {
        return Err(ProbeError::Statvfs {
            path: mount_path.to_string(),
            source: std::io::Error::last_os_error(),
        });
    }

    let block_size = stat.f_frsize as u64;
    let total = stat.f_blocks as u64 * block_size;
    let free = stat.f_bfree as u64 * block_size;
    let used = total.saturating_sub(free);

    Ok(DiskSpace { total, used, free })
}

#[cfg(not(unix))]
pub(crate) fn get_disk_space(_mount_path: &str) -> Result<DiskSpace, ProbeError> {
    tracing::warn!("get_disk_space: statvfs is unavailable on this platform");
    Err(ProbeError::Unsupported)
}
