//! Subcommand implementations.

pub mod convert;
pub mod verify;
