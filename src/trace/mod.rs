//! Simulation output.
//!
//! # Components
//! - [`Step`] - One record per reference: page, hit/miss, frame snapshot
//! - [`RunResult`] - Ordered steps for one policy plus derived counters
//! - [`RunStats`] - Hit/fault totals and ratios

mod run_result;
mod stats;
mod step;

pub use run_result::RunResult;
pub use stats::RunStats;
pub use step::{Status, Step};
