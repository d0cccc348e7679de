/// Volume usage for the filesystem containing a given path.
///
/// Windows uses `GetDiskFreeSpaceExW`; Unix uses `statvfs`. Both report
/// `used = total - free` where `free` counts all free blocks, including
/// those reserved for the superuser.
use std::io;
use std::path::Path;

/// Capacity figures for one volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeUsage {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub used_bytes: u64,
}

impl VolumeUsage {
    fn from_total_free(total_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            free_bytes,
            used_bytes: total_bytes.saturating_sub(free_bytes),
        }
    }
}

/// Query usage of the volume holding `path`.
#[cfg(windows)]
pub fn volume_usage(path: &Path) -> io::Result<VolumeUsage> {
    use std::os::windows::ffi::OsStrExt;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide_path: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0u16))
        .collect();

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    unsafe {
        GetDiskFreeSpaceExW(
            windows::core::PCWSTR(wide_path.as_ptr()),
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
    }
    .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(VolumeUsage::from_total_free(total, free_total))
}

/// Query usage of the volume holding `path`.
#[cfg(unix)]
pub fn volume_usage(path: &Path) -> io::Result<VolumeUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    // SAFETY: `c_path` is a valid NUL-terminated string and `stat` is a
    // properly sized, writable `statvfs` buffer.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let fragment = stat.f_frsize as u64;
    let total = (stat.f_blocks as u64).saturating_mul(fragment);
    let free = (stat.f_bfree as u64).saturating_mul(fragment);
    Ok(VolumeUsage::from_total_free(total, free))
}
