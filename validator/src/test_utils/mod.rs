//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Ordering checks that need a `Sequence` use `mockall` locally instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
