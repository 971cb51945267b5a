use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};


/// Creates each directory in `paths`, in order, along with any missing parents.
///
/// Directories that already exist are left untouched. When `verbose` is set,
/// one `INFO` event is emitted per path.
///
/// # Errors
/// Returns [`Error::Filesystem`] for the first path that cannot be created
/// (e.g. permission denied, or a component exists as a regular file).
/// Directories created before the failing path are not removed.
pub fn ensure_directories<I, P>(paths: I, verbose: bool) -> Result<()>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for path in paths {
        let path = path.as_ref();

        // `create_dir_all` treats an empty path as already existing.
        if path.as_os_str().is_empty() {
            return Err(Error::filesystem(
                "create directory",
                path,
                io::Error::from(io::ErrorKind::NotFound),
            ));
        }

        fs::create_dir_all(path)
            .map_err(|error| Error::filesystem("create directory", path, error))?;

        if verbose {
            info!("Created directory at: {}", path.display());
        }
    }

    Ok(())
}
