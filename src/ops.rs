//! Operations modules for interacting with external tools.
//!
//! This module contains the integration layer for the one system that `autopush` drives:
//!
//! - [`git`]: the working-tree operations a sync runs (staging, committing, pushing)
//!
//! The submodule provides a trait-based abstraction with real and mock implementations
//! to support both production use and testing.

pub mod git;
