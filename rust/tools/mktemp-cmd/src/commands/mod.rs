//! Command implementations for mktemp-cmd

pub mod create;
pub mod name;
