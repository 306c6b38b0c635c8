//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (PageId) and the validated frame Capacity
//! - Reference string parsing

mod capacity;
pub mod config;
pub mod error;
mod page_id;
mod parse;

pub use capacity::Capacity;
pub use config::SimulatorConfig;
pub use error::{Error, Result};
pub use page_id::{pages, PageId};
pub use parse::{parse_capacity, parse_reference_string};
