//! Creation of uniquely named files and directories.
//!
//! Every operation expands the template, tries to create the resulting path
//! exclusively, and on `AlreadyExists` starts over with a fresh name. The
//! number of retries is bounded by the template's outcome count (optionally
//! scaled by [`CreateOptions::with_budget_multiplier`]); running out of them
//! is reported as `ErrorKind::RetriesExhausted`. Any other filesystem error
//! ends the operation immediately as `ErrorKind::Io`.
//!
//! Three surfaces drive the same state machine:
//!
//! - blocking: [`create_file_blocking`], [`create_dir_blocking`];
//! - futures: [`create_file`], [`create_dir`];
//! - completion handlers: [`create_file_then`], [`create_dir_then`], which
//!   run the future on the current tokio runtime and pass its output on.

use std::path::{Path, PathBuf};

use mktemp_common::{Result, async_runtime};

use crate::fs::{AsyncExclusiveCreate, EntryKind, ExclusiveCreate, LocalFs};

mod attempts;

use attempts::{CreationAttempts, Step};

/// Per-call creation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateOptions {
    mode: Option<u32>,
    budget_multiplier: u64,
}

impl Default for CreateOptions {
    fn default() -> Self {
        CreateOptions {
            mode: None,
            budget_multiplier: 1,
        }
    }
}

impl CreateOptions {
    pub fn new() -> CreateOptions {
        Default::default()
    }

    /// Permission bits for the new entry (at most `0o7777`). When unset, the
    /// entry kind's [default](EntryKind::default_mode) applies.
    pub fn with_mode(mut self, mode: u32) -> CreateOptions {
        self.mode = Some(mode);
        self
    }

    /// Scales the retry budget: a template with outcome count `n` may collide
    /// `n * multiplier` times before giving up. Must be non-zero.
    pub fn with_budget_multiplier(mut self, multiplier: u64) -> CreateOptions {
        self.budget_multiplier = multiplier;
        self
    }

    pub fn mode(&self) -> Option<u32> {
        self.mode
    }

    pub fn budget_multiplier(&self) -> u64 {
        self.budget_multiplier
    }
}

/// Creates a uniquely named empty file from `template`, with mode `0o600`.
pub fn create_file_blocking(template: impl AsRef<Path>) -> Result<PathBuf> {
    create_file_blocking_with(template, CreateOptions::default())
}

pub fn create_file_blocking_with(
    template: impl AsRef<Path>,
    options: CreateOptions,
) -> Result<PathBuf> {
    create_blocking_in(&LocalFs, EntryKind::File, template.as_ref(), options)
}

/// Creates a uniquely named directory from `template`, with mode `0o700`.
pub fn create_dir_blocking(template: impl AsRef<Path>) -> Result<PathBuf> {
    create_dir_blocking_with(template, CreateOptions::default())
}

pub fn create_dir_blocking_with(
    template: impl AsRef<Path>,
    options: CreateOptions,
) -> Result<PathBuf> {
    create_blocking_in(&LocalFs, EntryKind::Dir, template.as_ref(), options)
}

/// Blocking retry loop over an arbitrary filesystem.
pub fn create_blocking_in<C>(
    fs: &C,
    kind: EntryKind,
    template: &Path,
    options: CreateOptions,
) -> Result<PathBuf>
where
    C: ExclusiveCreate + ?Sized,
{
    let mut state = CreationAttempts::new(template, kind, &options)?;
    loop {
        let candidate = state.next_candidate();
        let outcome = fs.create(state.kind(), &candidate, state.mode());
        match state.complete(candidate, outcome) {
            Step::Created(path) => return Ok(path),
            Step::Retry => continue,
            Step::Failed(e) => return Err(e),
        }
    }
}

/// Creates a uniquely named empty file from `template`, with mode `0o600`.
pub async fn create_file(template: impl AsRef<Path>) -> Result<PathBuf> {
    create_file_with(template, CreateOptions::default()).await
}

pub async fn create_file_with(
    template: impl AsRef<Path>,
    options: CreateOptions,
) -> Result<PathBuf> {
    create_in(&LocalFs, EntryKind::File, template.as_ref(), options).await
}

/// Creates a uniquely named directory from `template`, with mode `0o700`.
pub async fn create_dir(template: impl AsRef<Path>) -> Result<PathBuf> {
    create_dir_with(template, CreateOptions::default()).await
}

pub async fn create_dir_with(
    template: impl AsRef<Path>,
    options: CreateOptions,
) -> Result<PathBuf> {
    create_in(&LocalFs, EntryKind::Dir, template.as_ref(), options).await
}

/// Non-blocking retry loop over an arbitrary filesystem.
///
/// Attempts run one at a time. After a collision the task yields to the
/// scheduler before the next attempt, so long retry sequences neither grow
/// the stack nor monopolize the worker thread.
pub async fn create_in<C>(
    fs: &C,
    kind: EntryKind,
    template: &Path,
    options: CreateOptions,
) -> Result<PathBuf>
where
    C: AsyncExclusiveCreate + ?Sized,
{
    let mut state = CreationAttempts::new(template, kind, &options)?;
    loop {
        let candidate = state.next_candidate();
        let outcome = fs
            .create_async(state.kind(), &candidate, state.mode())
            .await;
        match state.complete(candidate, outcome) {
            Step::Created(path) => return Ok(path),
            Step::Retry => async_runtime::yield_now().await,
            Step::Failed(e) => return Err(e),
        }
    }
}

/// Starts creating a uniquely named file and calls `on_done` with the result.
///
/// Must be called from within a tokio runtime. The returned handle completes
/// after `on_done` has run.
pub fn create_file_then<F>(
    template: impl Into<PathBuf>,
    options: CreateOptions,
    on_done: F,
) -> async_runtime::JoinHandle<()>
where
    F: FnOnce(Result<PathBuf>) + Send + 'static,
{
    create_then_in(LocalFs, EntryKind::File, template.into(), options, on_done)
}

/// Starts creating a uniquely named directory and calls `on_done` with the result.
///
/// Must be called from within a tokio runtime.
pub fn create_dir_then<F>(
    template: impl Into<PathBuf>,
    options: CreateOptions,
    on_done: F,
) -> async_runtime::JoinHandle<()>
where
    F: FnOnce(Result<PathBuf>) + Send + 'static,
{
    create_then_in(LocalFs, EntryKind::Dir, template.into(), options, on_done)
}

/// Completion-handler adapter: spawns [`create_in`] and forwards its output.
pub fn create_then_in<C, F>(
    fs: C,
    kind: EntryKind,
    template: PathBuf,
    options: CreateOptions,
    on_done: F,
) -> async_runtime::JoinHandle<()>
where
    C: AsyncExclusiveCreate + 'static,
    F: FnOnce(Result<PathBuf>) + Send + 'static,
{
    async_runtime::spawn(async move {
        let result = create_in(&fs, kind, &template, options).await;
        on_done(result);
    })
}
