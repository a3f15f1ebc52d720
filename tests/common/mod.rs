//! Common test utilities and fixtures for baseline-scanner integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating scratch projects with source files
//! - Custom assertions for validating CLI output and scan results

#![allow(unused_imports)]
#![allow(dead_code)]


pub use assertions::*;
pub use test_repo::TestRepo;
