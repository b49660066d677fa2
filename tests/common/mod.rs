//! Common utilities for integration tests
//!
//! Each test binary uses a different subset of these helpers.

#![allow(dead_code)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use fixtures::{diagonal_ramp, rotating_cycle, write_solver_output};
#[allow(unused_imports)]
pub use test_helpers::{assert_matrices_close, read_back};
