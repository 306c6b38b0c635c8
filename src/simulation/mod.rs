//! Simulation driver.
//!
//! The only layer that knows about more than one policy. It validates the
//! input, runs each selected engine once on its own frame store, and
//! collects the results for comparison.
//!
//! # Components
//! - [`Simulator`] - Validates input and runs policies
//! - [`SimulationReport`] - Per-policy results and the comparison table

mod report;
mod simulator;

pub use report::{SimulationReport, SummaryRow};
pub use simulator::Simulator;
