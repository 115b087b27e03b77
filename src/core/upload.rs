//! Prescription file storage.
//!
//! Uploaded bytes are written under the configured upload directory. Only the
//! final file-name component of the client-supplied name is used, so a name
//! like `../../etc/passwd` cannot escape the directory.

use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// Writes uploaded prescription bytes to disk and returns the stored path.
///
/// The upload directory is created if it does not exist yet.
///
/// # Errors
/// Returns an error if the file name has no usable final component or the
/// filesystem write fails.
pub async fn store_prescription(
    upload_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf> {
    let name = Path::new(file_name)
        .file_name()
        .ok_or_else(|| Error::Config {
            message: format!("Invalid file name: {file_name}"),
        })?;

    tokio::fs::create_dir_all(upload_dir).await?;

    let path = upload_dir.join(name);
    tokio::fs::write(&path, bytes).await?;

    tracing::info!(path = %path.display(), size = bytes.len(), "stored prescription file");
    Ok(path)
}
