//! Exclusive-create primitives of the host filesystem.
//!
//! The retry loop never checks for existence on its own: each attempt is a
//! single create-if-absent call, and a collision is recognized solely by the
//! `ErrorKind::AlreadyExists` reported by that call.

use std::path::Path;

use async_trait::async_trait;

#[cfg_attr(unix, path = "unix.rs")]
#[cfg_attr(windows, path = "windows.rs")]
mod platform;

pub use platform::*;

/// The kind of filesystem entry to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Permission bits used when the caller does not supply a mode:
    /// `0o600` for files, `0o700` for directories.
    pub const fn default_mode(self) -> u32 {
        match self {
            EntryKind::File => 0o600,
            EntryKind::Dir => 0o700,
        }
    }
}

/// Blocking exclusive creation.
///
/// Implementations must fail with `ErrorKind::AlreadyExists` when `path` is
/// taken, without modifying the existing entry.
pub trait ExclusiveCreate {
    fn create_file(&self, path: &Path, mode: u32) -> std::io::Result<()>;

    fn create_dir(&self, path: &Path, mode: u32) -> std::io::Result<()>;

    fn create(&self, kind: EntryKind, path: &Path, mode: u32) -> std::io::Result<()> {
        match kind {
            EntryKind::File => self.create_file(path, mode),
            EntryKind::Dir => self.create_dir(path, mode),
        }
    }
}

/// Non-blocking exclusive creation, with the same contract as [`ExclusiveCreate`].
#[async_trait]
pub trait AsyncExclusiveCreate: Send + Sync {
    async fn create_file_async(&self, path: &Path, mode: u32) -> std::io::Result<()>;

    async fn create_dir_async(&self, path: &Path, mode: u32) -> std::io::Result<()>;

    async fn create_async(&self, kind: EntryKind, path: &Path, mode: u32) -> std::io::Result<()> {
        match kind {
            EntryKind::File => self.create_file_async(path, mode).await,
            EntryKind::Dir => self.create_dir_async(path, mode).await,
        }
    }
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ExclusiveCreate for LocalFs {
    fn create_file(&self, path: &Path, mode: u32) -> std::io::Result<()> {
        create_new_file(path, mode)
    }

    fn create_dir(&self, path: &Path, mode: u32) -> std::io::Result<()> {
        create_new_dir(path, mode)
    }
}

#[async_trait]
impl AsyncExclusiveCreate for LocalFs {
    async fn create_file_async(&self, path: &Path, mode: u32) -> std::io::Result<()> {
        create_new_file_async(path, mode).await
    }

    async fn create_dir_async(&self, path: &Path, mode: u32) -> std::io::Result<()> {
        create_new_dir_async(path, mode).await
    }
}
