//! Filesystem helpers: idempotent directory creation and file size reporting.

mod directories;
mod size;

pub use directories::ensure_directories;
pub use size::{file_size, get_size, FileSize};
