//! Page replacement policies.
//!
//! Each engine is a [`Replacer`]: a capacity-bounded frame store that
//! decides hits, misses and victims for one reference at a time.
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts by arrival order
//! - [`LruReplacer`] - evicts by recency, reordering on every hit
//! - [`OptimalReplacer`] - evicts by furthest next use (Belady)
//!
//! [`Policy`] names an engine and runs it over a reference sequence.

mod fifo;
mod kind;
mod lru;
mod optimal;
mod replacer;

pub use fifo::FifoReplacer;
pub use kind::Policy;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;
pub use replacer::{simulate, Access, Replacer};
