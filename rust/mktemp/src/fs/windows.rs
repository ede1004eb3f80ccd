//! Windows-specific exclusive creation.
//!
//! Windows has no Unix permission bits. A file mode without the owner write
//! bit (`0o200`) is mapped to `FILE_ATTRIBUTE_READONLY`; all other bits are
//! ignored, as is the directory mode.

use std::{
    fs::{DirBuilder, OpenOptions},
    os::windows::fs::OpenOptionsExt,
    path::Path,
};

use windows_sys::Win32::Storage::FileSystem::{FILE_ATTRIBUTE_NORMAL, FILE_ATTRIBUTE_READONLY};

fn file_attributes(mode: u32) -> u32 {
    if mode & 0o200 == 0 {
        FILE_ATTRIBUTE_READONLY
    } else {
        FILE_ATTRIBUTE_NORMAL
    }
}

/// Creates a new, empty file at `path` (`CREATE_NEW` disposition).
///
/// Fails with `ErrorKind::AlreadyExists` if the file exists. The handle is
/// closed before returning.
pub fn create_new_file(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options
        .write(true)
        .create_new(true)
        .attributes(file_attributes(mode));
    let file = options.open(path)?;
    drop(file);
    Ok(())
}

/// Creates a single directory at `path`. `mode` is ignored.
pub fn create_new_dir(path: &Path, _mode: u32) -> std::io::Result<()> {
    DirBuilder::new().create(path)
}

/// Non-blocking counterpart of [`create_new_file`].
pub async fn create_new_file_async(path: &Path, mode: u32) -> std::io::Result<()> {
    let file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .attributes(file_attributes(mode))
        .open(path)
        .await?;
    drop(file.into_std().await);
    Ok(())
}

/// Non-blocking counterpart of [`create_new_dir`].
pub async fn create_new_dir_async(path: &Path, _mode: u32) -> std::io::Result<()> {
    tokio::fs::DirBuilder::new().create(path).await
}
