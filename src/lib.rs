//! pagesim - A page replacement simulator.
//!
//! Replays a sequence of page references against a fixed number of frames
//! under FIFO, LRU and Optimal (Belady) replacement, producing a
//! step-by-step trace and hit/fault counts for each policy.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front end (bin/cli.rs)  [consumer only]           │   │
//! │  │      text entry → tables / step listing / JSON           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulation Driver (simulation/)                │   │
//! │  │        Simulator → SimulationReport (per policy)         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacement Engines (policy/)               │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │       Replacers: FIFO | LRU | Optimal           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Output (trace/)                         │   │
//! │  │             Step + RunResult + RunStats                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Capacity, Error, config, parsing)
//! - [`policy`] - Replacement engines
//! - [`trace`] - Step records and per-run results
//! - [`simulation`] - The driver that runs policies side by side
//!
//! # Quick Start
//! ```
//! use pagesim::{Policy, Simulator};
//!
//! let sim = Simulator::default();
//! let report = sim.run_str("1 2 3 4 1 2 5", 3, &Policy::ALL).unwrap();
//!
//! for row in report.summary() {
//!     println!("{}", row);
//! }
//! assert_eq!(report.fewest_faults(), Some(Policy::Optimal));
//! ```

pub mod common;
pub mod policy;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAMES, DEFAULT_REFERENCE_STRING};
pub use common::{
    pages, parse_capacity, parse_reference_string, Capacity, Error, PageId, Result,
    SimulatorConfig,
};

pub use policy::{Access, FifoReplacer, LruReplacer, OptimalReplacer, Policy, Replacer};
pub use simulation::{SimulationReport, Simulator, SummaryRow};
pub use trace::{RunResult, RunStats, Status, Step};
