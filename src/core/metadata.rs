use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Row prefix printed when an entry cannot be statted.
pub const UNKNOWN_PERMISSIONS: &str = "??????????";

const LISTING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const FULL_TIME_FORMAT: &str = "%c";

const PERMISSION_BITS: [(u32, char); 9] = [
    (libc::S_IRUSR as u32, 'r'),
    (libc::S_IWUSR as u32, 'w'),
    (libc::S_IXUSR as u32, 'x'),
    (libc::S_IRGRP as u32, 'r'),
    (libc::S_IWGRP as u32, 'w'),
    (libc::S_IXGRP as u32, 'x'),
    (libc::S_IROTH as u32, 'r'),
    (libc::S_IWOTH as u32, 'w'),
    (libc::S_IXOTH as u32, 'x'),
];

/// What a single metadata query tells us about a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSnapshot {
    pub size: u64,
    pub is_dir: bool,
    pub mode: u32,
    pub modified: SystemTime,
}

impl FileSnapshot {
    /// Stats `path`, following symbolic links.
    pub fn query(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        Self::from_metadata(&meta)
    }

    pub fn from_metadata(meta: &Metadata) -> io::Result<Self> {
        Ok(Self {
            size: meta.len(),
            is_dir: meta.is_dir(),
            mode: meta.permissions().mode(),
            modified: meta.modified()?,
        })
    }

    pub fn permission_string(&self) -> String {
        format_mode(self.mode, self.is_dir)
    }

    pub fn type_name(&self) -> &'static str {
        if self.is_dir {
            "directory"
        } else {
            "file"
        }
    }

    pub fn listing_time(&self) -> String {
        format_time(self.modified, LISTING_TIME_FORMAT)
    }

    pub fn full_time(&self) -> String {
        format_time(self.modified, FULL_TIME_FORMAT)
    }
}

/// Renders the 10-character `drwxr-xr-x` form of a mode.
pub fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for (bit, symbol) in PERMISSION_BITS {
        out.push(if mode & bit != 0 { symbol } else { '-' });
    }
    out
}

fn format_time(time: SystemTime, format: &str) -> String {
    DateTime::<Local>::from(time).format(format).to_string()
}
