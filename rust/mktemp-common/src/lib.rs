//! Core definitions (error type, result helpers and runtime shims), relied upon by all mktemp-* crates.

pub mod async_runtime;
pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
