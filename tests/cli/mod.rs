//! CLI command integration tests
//!
//! Run the compiled binary against scratch projects and check exit codes
//! and both output formats.

pub mod lookup_tests;
