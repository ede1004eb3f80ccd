//! Template expansion into random names.
//!
//! A template carries a run of placeholder characters (`X`). The run that gets
//! replaced is the rightmost one after which only non-placeholder characters
//! appear up to the end of the template, so `"XXXXX.tmp"` and `"tmp-XXXXXX"`
//! are both expanded, while in `"XXXXX_XXXXX"` only the second run is.
//! Templates without any placeholder are returned unchanged.

use std::{ops::Range, path::Path};

use mktemp_common::{Error, Result};

/// The character marking positions eligible for randomization.
pub const PLACEHOLDER: u8 = b'X';

/// Symbols a placeholder may be replaced with (case-sensitive digits and letters).
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A source of uniformly distributed indices, used to pick alphabet symbols.
///
/// The production source is [`fastrand::Rng`]; tests substitute a seeded or
/// scripted source to get reproducible names.
pub trait RandomSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

/// Locates the placeholder run that gets replaced, as a byte range of `template`.
///
/// Returns `None` when the template contains no placeholder at all.
pub fn placeholder_run(template: &str) -> Option<Range<usize>> {
    let bytes = template.as_bytes();
    let end = bytes.iter().rposition(|&b| b == PLACEHOLDER)? + 1;
    let start = bytes[..end]
        .iter()
        .rposition(|&b| b != PLACEHOLDER)
        .map_or(0, |pos| pos + 1);
    Some(start..end)
}

/// Counts the distinct names `template` can expand to: `62^n` for a run of
/// length `n`, or `1` when there is no run.
///
/// Counts beyond `u64::MAX` (runs of 11 placeholders or more) saturate.
pub fn outcome_count(template: &str) -> u64 {
    let Some(run) = placeholder_run(template) else {
        return 1;
    };
    u32::try_from(run.len())
        .ok()
        .and_then(|len| (ALPHABET.len() as u64).checked_pow(len))
        .unwrap_or(u64::MAX)
}

/// Expands `template` using a fresh non-cryptographic random generator.
pub fn generate_unique_name(template: &str) -> String {
    generate_unique_name_with(template, &mut fastrand::Rng::new())
}

/// Expands `template`, drawing each replacement symbol from `rng`.
///
/// The result has the same length as the template; everything outside of the
/// placeholder run is copied verbatim.
pub fn generate_unique_name_with<R>(template: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let Some(run) = placeholder_run(template) else {
        return template.to_string();
    };

    let mut name = String::with_capacity(template.len());
    name.push_str(&template[..run.start]);
    name.extend(
        std::iter::repeat_with(|| ALPHABET[rng.next_index(ALPHABET.len())] as char)
            .take(run.len()),
    );
    name.push_str(&template[run.end..]);
    name
}

/// Views a path-shaped template as a string.
///
/// Templates must be valid Unicode to be expanded; anything else is rejected
/// as an invalid argument.
pub fn template_str(template: &Path) -> Result<&str> {
    template.to_str().ok_or_else(|| {
        Error::invalid_arg(
            "template",
            format!("template must be valid Unicode: {}", template.display()),
        )
    })
}
