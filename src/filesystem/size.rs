use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const BYTES_PER_KILOBYTE: u64 = 1024;


/// Size of a file on disk, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileSize {
    bytes: u64,
}

impl FileSize {
    pub const fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Size in kilobytes (1 KB = 1024 bytes), rounded to the nearest integer.
    /// Exact halves round to the even neighbour.
    pub const fn kilobytes_rounded(&self) -> u64 {
        let whole = self.bytes / BYTES_PER_KILOBYTE;
        let remainder = self.bytes % BYTES_PER_KILOBYTE;
        let half = BYTES_PER_KILOBYTE / 2;

        if remainder > half || (remainder == half && whole % 2 == 1) {
            whole + 1
        } else {
            whole
        }
    }
}

impl Display for FileSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "~ {} KB", self.kilobytes_rounded())
    }
}


/// Reads the size of the file at `path` from its metadata.
pub fn file_size<P: AsRef<Path>>(path: P) -> Result<FileSize> {
    let path = path.as_ref();

    let metadata = fs::metadata(path)
        .map_err(|error| Error::filesystem("read file metadata", path, error))?;

    Ok(FileSize::from_bytes(metadata.len()))
}

/// Returns the size of the file at `path` formatted as `~ <N> KB`.
pub fn get_size<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(file_size(path)?.to_string())
}
