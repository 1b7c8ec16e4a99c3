//! Common test utilities and helpers for driver tests.
//!
//! This module provides shared functionality across integration tests:
//! - Agent directory fixtures
//! - Custom assertions on converted documents

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
