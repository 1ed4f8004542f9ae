//! Command handlers for pareto-check
//!
//! `check` and `list` run through the library entry points; this module holds
//! the commands with their own output:
//! - `stats`: Per-front statistics of each log
//! - `stage`: Copy segmentation images into the evaluator layout and run it

pub mod stage;
pub mod stats;
