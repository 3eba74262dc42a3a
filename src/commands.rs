//! Command implementations.
//!
//! Each command is an inherent method on [`App`](crate::App) that writes its
//! progress to a caller-supplied writer so tests can capture the output.

pub mod sync;
