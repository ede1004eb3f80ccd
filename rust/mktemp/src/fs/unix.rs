//! Unix-specific exclusive creation.
//!
//! Files are opened with `O_CREAT | O_EXCL`, so the existence check and the
//! creation happen in a single system call. The requested mode is passed to
//! `open(2)`/`mkdir(2)` and is subject to the process umask.

use std::{
    fs::{DirBuilder, OpenOptions},
    os::unix::fs::{DirBuilderExt, OpenOptionsExt},
    path::Path,
};

/// Creates a new, empty file at `path` with permission bits `mode`.
///
/// Fails with `ErrorKind::AlreadyExists` if anything exists at `path`; an
/// existing file is left untouched. The handle is closed before returning.
pub fn create_new_file(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true).mode(mode);
    let file = options.open(path)?;
    drop(file);
    Ok(())
}

/// Creates a single directory at `path` with permission bits `mode`.
pub fn create_new_dir(path: &Path, mode: u32) -> std::io::Result<()> {
    DirBuilder::new().mode(mode).create(path)
}

/// Non-blocking counterpart of [`create_new_file`].
pub async fn create_new_file_async(path: &Path, mode: u32) -> std::io::Result<()> {
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode)
        .open(path)
        .await?;
    // Close on this task rather than in the background, so the handle is
    // released by the time the caller sees the path.
    drop(file.into_std().await);
    Ok(())
}

/// Non-blocking counterpart of [`create_new_dir`].
pub async fn create_new_dir_async(path: &Path, mode: u32) -> std::io::Result<()> {
    tokio::fs::DirBuilder::new().mode(mode).create(path).await
}
