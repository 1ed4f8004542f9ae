//! Log data model.
//!
//! Parsing of fitness logs and tabular rendering of their individuals.

pub mod log;
pub mod table;
