//! Unique-name creation of temporary files and directories.
//!
//! A template such as `"/tmp/build-XXXXXX"` is expanded into a random name
//! (see [`unique_name`]) and the entry is created exclusively, so no other
//! process can have created it in between. When the name is already taken a
//! new one is generated, up to a retry budget derived from the number of
//! names the template can produce (see [`creation`]).
//!
//! ```no_run
//! let path = mktemp::create_file_blocking("/tmp/XXXXX.tmp")?;
//! # Ok::<(), mktemp::Error>(())
//! ```

pub mod creation;
pub mod fs;
pub mod unique_name;

pub use creation::{
    CreateOptions, create_dir, create_dir_blocking, create_dir_blocking_with, create_dir_then,
    create_dir_with, create_file, create_file_blocking, create_file_blocking_with,
    create_file_then, create_file_with,
};
pub use fs::EntryKind;
pub use mktemp_common::{Error, ErrorKind, Result};
pub use unique_name::{generate_unique_name, outcome_count};
