//! # CLI Command Implementations
//!
//! One module per subcommand of the `obce` tool. Each module defines an
//! `Args` struct derived with `clap` and an `execute` function that
//! orchestrates the run by calling into the `obce` library: load,
//! transform, sort, write, then print a summary.

pub mod convert;
pub mod fetch_municipalities;
pub mod fetch_towns;
pub mod merge_towns;
