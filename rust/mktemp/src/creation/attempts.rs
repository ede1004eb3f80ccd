//! The collision-retry state machine shared by all creation surfaces.
//!
//! `CreationAttempts` performs no I/O itself. An adapter asks it for a
//! candidate path, performs one exclusive-create call (blocking or awaited),
//! and hands the outcome back to [`CreationAttempts::complete`], which decides
//! whether the call succeeded, must be retried with a new candidate, or failed.

use std::path::{Path, PathBuf};

use mktemp_common::{Error, Result, verify_arg};

use crate::{
    creation::CreateOptions,
    fs::EntryKind,
    unique_name::{RandomSource, generate_unique_name_with, outcome_count, template_str},
};

/// Outcome of one attempt, as seen by the adapter driving the loop.
#[derive(Debug)]
pub(crate) enum Step {
    Created(PathBuf),
    Retry,
    Failed(Error),
}

pub(crate) struct CreationAttempts<R = fastrand::Rng> {
    template: String,
    kind: EntryKind,
    mode: u32,
    /// Collisions that may still be retried.
    budget: u64,
    attempts: u64,
    rng: R,
}

impl CreationAttempts {
    pub fn new(template: &Path, kind: EntryKind, options: &CreateOptions) -> Result<Self> {
        Self::with_rng(template, kind, options, fastrand::Rng::new())
    }
}

impl<R: RandomSource> CreationAttempts<R> {
    pub fn with_rng(
        template: &Path,
        kind: EntryKind,
        options: &CreateOptions,
        rng: R,
    ) -> Result<Self> {
        let template = template_str(template)?.to_string();

        let mode = options.mode().unwrap_or(kind.default_mode());
        verify_arg!(mode, mode <= 0o7777);
        let multiplier = options.budget_multiplier();
        verify_arg!(budget_multiplier, multiplier > 0);

        let budget = outcome_count(&template).saturating_mul(multiplier);
        Ok(CreationAttempts {
            template,
            kind,
            mode,
            budget,
            attempts: 0,
            rng,
        })
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn mode(&self) -> u32 {
        self.mode
    }

    pub fn next_candidate(&mut self) -> PathBuf {
        self.attempts += 1;
        let candidate = PathBuf::from(generate_unique_name_with(&self.template, &mut self.rng));
        log::trace!(
            "attempt {} to create {:?} at {}",
            self.attempts,
            self.kind,
            candidate.display()
        );
        candidate
    }

    /// Classifies the result of creating `candidate`.
    pub fn complete(&mut self, candidate: PathBuf, outcome: std::io::Result<()>) -> Step {
        match outcome {
            Ok(()) => {
                log::debug!(
                    "created {:?} {} after {} attempt(s)",
                    self.kind,
                    candidate.display(),
                    self.attempts
                );
                Step::Created(candidate)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if self.budget == 0 {
                    log::debug!(
                        "giving up on '{}' after {} colliding attempt(s)",
                        self.template,
                        self.attempts
                    );
                    return Step::Failed(Error::retries_exhausted(
                        self.template.as_str(),
                        self.attempts,
                    ));
                }
                self.budget -= 1;
                log::debug!(
                    "{} already exists, {} retries left",
                    candidate.display(),
                    self.budget
                );
                Step::Retry
            }
            Err(e) => Step::Failed(Error::io(candidate.display().to_string(), e)),
        }
    }
}
