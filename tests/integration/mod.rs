//! Integration tests for pareto-check.
//!
//! These tests run the checks end to end over log directories written to
//! temporary folders.

pub mod cli_tests;
pub mod output_tests;
pub mod property_tests;
